//! Hardcoded weather lookup

use crate::types::WeatherResponse;

/// Returned for any location without a table entry
pub const FALLBACK_WEATHER: &str = "Weather data not available for this location.";

static WEATHER_TABLE: &[(&str, &str)] = &[
    ("New York", "Sunny, 25C"),
    ("London", "Cloudy, 18C"),
    ("Tokyo", "Rainy, 22C"),
];

/// Look up the forecast for `location`.
///
/// Matching is exact: no trimming, no case folding. Unknown locations get
/// [`FALLBACK_WEATHER`] rather than an error.
pub fn get_weather_forecast(location: &str) -> WeatherResponse {
    let weather = WEATHER_TABLE
        .iter()
        .find(|(city, _)| *city == location)
        .map_or(FALLBACK_WEATHER, |(_, weather)| *weather);

    WeatherResponse {
        weather: weather.to_string(),
    }
}

/// Locations with a table entry
pub fn known_locations() -> impl Iterator<Item = &'static str> {
    WEATHER_TABLE.iter().map(|(city, _)| *city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_locations_return_fixed_strings() {
        assert_eq!(get_weather_forecast("New York").weather, "Sunny, 25C");
        assert_eq!(get_weather_forecast("London").weather, "Cloudy, 18C");
        assert_eq!(get_weather_forecast("Tokyo").weather, "Rainy, 22C");
    }

    #[test]
    fn test_unknown_locations_fall_back() {
        for location in ["Paris", "", " London", "London ", "Tokyo\n"] {
            assert_eq!(
                get_weather_forecast(location).weather,
                FALLBACK_WEATHER,
                "expected fallback for {:?}",
                location
            );
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(get_weather_forecast("new york").weather, FALLBACK_WEATHER);
        assert_eq!(get_weather_forecast("LONDON").weather, FALLBACK_WEATHER);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = get_weather_forecast("Tokyo");
        for _ in 0..10 {
            assert_eq!(get_weather_forecast("Tokyo"), first);
        }
    }

    #[test]
    fn test_known_locations() {
        let locations: Vec<_> = known_locations().collect();
        assert_eq!(locations, vec!["New York", "London", "Tokyo"]);
    }

    #[test]
    fn test_response_serializes_single_field() {
        let json = serde_json::to_value(get_weather_forecast("London")).unwrap();
        assert_eq!(json, serde_json::json!({ "weather": "Cloudy, 18C" }));
    }
}
