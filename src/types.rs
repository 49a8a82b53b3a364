//! Core types for weathermock

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Forecast returned for a single location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct WeatherResponse {
    /// Human-readable weather description
    #[schema(example = "Cloudy, 18C")]
    pub weather: String,
}

/// Parameters for a forecast lookup
#[derive(Debug, Clone, Deserialize, IntoParams, JsonSchema)]
#[into_params(parameter_in = Query)]
pub struct ForecastParams {
    /// City name, matched exactly (case-sensitive)
    pub location: String,
}
