//! API request handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::routes::{ApiDoc, AppState};
use crate::types::{ForecastParams, WeatherResponse};

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    operation_id = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Get the weather forecast for a location
///
/// Unknown locations are not an error: they return a fixed "not available"
/// message.
#[utoipa::path(
    get,
    path = "/api/weather",
    operation_id = "getWeatherForecast",
    params(ForecastParams),
    responses(
        (status = 200, description = "Forecast for the location", body = WeatherResponse),
        (status = 400, description = "Missing or malformed location parameter", body = ErrorResponse)
    ),
    tag = "weather"
)]
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    query: Result<Query<ForecastParams>, QueryRejection>,
) -> Result<Json<WeatherResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Query(params) = query.map_err(|rejection| {
        (
            rejection.status(),
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
    })?;

    Ok(Json((state.forecast)(&params.location)))
}

/// Raw OpenAPI document, used when Swagger UI is disabled
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(ApiDoc::openapi())
}
