//! Operation ID to handler resolution

use utoipa::openapi::path::{Operation, PathItem};
use utoipa::openapi::OpenApi;

use crate::error::{Error, Result};
use crate::forecast::get_weather_forecast;
use crate::types::WeatherResponse;

pub const GET_WEATHER_FORECAST: &str = "getWeatherForecast";

/// Tag marking operations that must be bound to a controller function
pub const WEATHER_TAG: &str = "weather";

pub type OperationHandler = fn(&str) -> WeatherResponse;

/// Resolve an operation ID to its handler
pub fn resolve(operation_id: &str) -> Result<OperationHandler> {
    match operation_id {
        GET_WEATHER_FORECAST => Ok(get_weather_forecast),
        other => Err(Error::UnknownOperation(other.to_string())),
    }
}

/// Resolve every weather operation declared in an API document.
///
/// Fails on the first operation that is missing an ID or whose ID has no
/// handler.
pub fn resolve_declared(doc: &OpenApi) -> Result<Vec<(String, OperationHandler)>> {
    let mut resolved = Vec::new();

    for (path, item) in doc.paths.paths.iter() {
        for operation in operations(item) {
            let is_weather = operation
                .tags
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t == WEATHER_TAG));
            if !is_weather {
                continue;
            }

            let id = operation.operation_id.as_deref().ok_or_else(|| {
                Error::Config(format!("Operation on {} has no operationId", path))
            })?;
            let handler = resolve(id)?;
            tracing::debug!("Resolved operation {} on {}", id, path);
            resolved.push((id.to_string(), handler));
        }
    }

    Ok(resolved)
}

fn operations(item: &PathItem) -> impl Iterator<Item = &Operation> {
    [
        &item.get,
        &item.put,
        &item.post,
        &item.delete,
        &item.options,
        &item.head,
        &item.patch,
        &item.trace,
    ]
    .into_iter()
    .filter_map(|op| op.as_ref())
}
