//! MCP server implementation

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler, ServiceExt};
use std::sync::Arc;

use crate::forecast::known_locations;
use crate::resolver::OperationHandler;
use crate::types::ForecastParams;

/// MCP server exposing the forecast lookup as a tool
#[derive(Clone)]
pub struct WeatherServer {
    forecast: OperationHandler,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WeatherServer {
    pub fn new(forecast: OperationHandler) -> Self {
        Self {
            forecast,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the weather forecast for a city
    #[tool(description = "Get the weather forecast for a city. Returns JSON of the form {\"weather\": \"...\"}. City names are matched exactly.")]
    pub async fn get_weather_forecast(&self, Parameters(params): Parameters<ForecastParams>) -> String {
        tracing::debug!("MCP forecast request for {:?}", params.location);
        let response = (self.forecast)(&params.location);
        serde_json::to_string(&response).unwrap_or_else(|e| format!("Error: {}", e))
    }
}

#[tool_handler]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        let cities = known_locations().collect::<Vec<_>>().join(", ");

        rmcp::model::ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::default(),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: rmcp::model::Implementation {
                name: "weathermock".into(),
                title: Some("Weather Mock".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(format!(
                "Mock weather service. Use get_weather_forecast with a city name. Forecasts exist for: {}.",
                cities
            )),
        }
    }
}

/// Run the MCP server on stdio
pub async fn serve_stdio(server: WeatherServer) -> anyhow::Result<()> {
    tracing::info!("Starting MCP server on stdio...");
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}

/// Run the MCP server on HTTP
pub async fn serve_http(server: WeatherServer, addr: &str) -> anyhow::Result<()> {
    use axum::routing::get;
    use axum::Router;
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService, StreamableHttpServerConfig,
    };
    use tokio_util::sync::CancellationToken;

    let forecast = server.forecast;

    let ct = CancellationToken::new();

    let config = StreamableHttpServerConfig {
        cancellation_token: ct.clone(),
        ..Default::default()
    };

    let mcp_service = StreamableHttpService::new(
        move || Ok(WeatherServer::new(forecast)),
        Arc::new(LocalSessionManager::default()),
        config,
    );

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", mcp_service);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("MCP server running at http://{}/mcp", addr);
    tracing::info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down...");
            ct.cancel();
        })
        .await?;

    Ok(())
}
