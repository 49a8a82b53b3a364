//! API route definitions

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, ErrorResponse, HealthResponse};
use crate::error::{Error, Result};
use crate::mcp::WeatherServer;
use crate::resolver::{self, OperationHandler, GET_WEATHER_FORECAST};
use crate::types::WeatherResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Mock API",
        version = "0.1.0",
        description = "Mock weather forecasts for a fixed set of cities"
    ),
    tags(
        (name = "weather", description = "Weather forecasts"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::get_weather_forecast,
    ),
    components(schemas(
        WeatherResponse,
        HealthResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub forecast: OperationHandler,
}

impl AppState {
    /// Resolve the forecast handler directly by operation ID
    pub fn resolve() -> Result<Self> {
        Ok(Self {
            forecast: resolver::resolve(GET_WEATHER_FORECAST)?,
        })
    }

    /// Bind every weather operation declared in `doc` to its handler
    pub fn from_api_doc(doc: &utoipa::openapi::OpenApi) -> Result<Self> {
        let forecast = resolver::resolve_declared(doc)?
            .into_iter()
            .find(|(id, _)| id == GET_WEATHER_FORECAST)
            .map(|(_, handler)| handler)
            .ok_or_else(|| {
                Error::Config(format!(
                    "API document does not declare {}",
                    GET_WEATHER_FORECAST
                ))
            })?;

        tracing::info!("Bound operation {}", GET_WEATHER_FORECAST);
        Ok(Self { forecast })
    }
}

fn api_routes(swagger_ui: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/api/weather", get(handlers::get_weather_forecast))
        .route("/health", get(handlers::health));

    // OpenAPI spec, with or without Swagger UI
    if swagger_ui {
        router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
    } else {
        router.route("/api/openapi.json", get(handlers::openapi_json))
    }
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the API router
pub fn create_router(state: AppState, swagger_ui: bool) -> Router {
    api_routes(swagger_ui)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the API router with MCP endpoint integrated
pub fn create_router_with_mcp(state: AppState, swagger_ui: bool, ct: CancellationToken) -> Router {
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService, StreamableHttpServerConfig,
    };

    let config = StreamableHttpServerConfig {
        cancellation_token: ct,
        ..Default::default()
    };

    let forecast = state.forecast;
    let mcp_service = StreamableHttpService::new(
        move || Ok(WeatherServer::new(forecast)),
        Arc::new(LocalSessionManager::default()),
        config,
    );

    api_routes(swagger_ui)
        // MCP endpoint
        .nest_service("/mcp", mcp_service)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::WEATHER_TAG;
    use utoipa::openapi::path::{HttpMethod, OperationBuilder, PathItem};
    use utoipa::openapi::{OpenApiBuilder, PathsBuilder};

    #[test]
    fn test_from_api_doc_binds_forecast() {
        let state = AppState::from_api_doc(&ApiDoc::openapi()).expect("Should bind");
        assert_eq!((state.forecast)("London").weather, "Cloudy, 18C");
    }

    #[test]
    fn test_from_api_doc_requires_forecast_operation() {
        let health_only = OpenApiBuilder::new()
            .paths(PathsBuilder::new().path(
                "/health",
                PathItem::new(
                    HttpMethod::Get,
                    OperationBuilder::new().operation_id(Some("health")).build(),
                ),
            ))
            .build();

        let err = AppState::from_api_doc(&health_only).err().expect("Should fail");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(
            err.to_string(),
            "Config error: API document does not declare getWeatherForecast"
        );
    }

    #[test]
    fn test_from_api_doc_rejects_unbound_weather_operation() {
        let doc = OpenApiBuilder::new()
            .paths(PathsBuilder::new().path(
                "/api/humidity",
                PathItem::new(
                    HttpMethod::Get,
                    OperationBuilder::new()
                        .operation_id(Some("getHumidity"))
                        .tag(WEATHER_TAG)
                        .build(),
                ),
            ))
            .build();

        let err = AppState::from_api_doc(&doc).err().expect("Should fail");
        assert!(matches!(err, Error::UnknownOperation(ref id) if id == "getHumidity"));
    }

    #[test]
    fn test_error_response_in_document() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("Should have components").schemas;
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
