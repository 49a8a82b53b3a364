//! weathermock - Mock weather forecast API with OpenAPI documentation and MCP integration

pub mod config;
pub mod error;
pub mod types;

pub mod forecast;
pub mod resolver;
pub mod mcp;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use forecast::{get_weather_forecast, FALLBACK_WEATHER};
pub use types::*;
