use crate::services::LookupError;
use skyglance_core::WeatherError;

impl From<LookupError> for WeatherError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NoMatch(query) => WeatherError::CoordinatesNotFound(query),
            LookupError::Geocode(e) => WeatherError::GeocodeFailed(e.to_string()),
            LookupError::Fetch(e) => WeatherError::WeatherFetchFailed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyglance_core::NetworkError;
    use skyglance_weather::ClientError;

    #[test]
    fn failures_collapse_to_stage_message() {
        let timeout = WeatherError::from(LookupError::Geocode(ClientError::Network(
            NetworkError::Timeout,
        )));
        let server = WeatherError::from(LookupError::Geocode(ClientError::Network(
            NetworkError::ServerError {
                status: 500,
                message: "boom".into(),
            },
        )));
        let unauthorized = WeatherError::from(LookupError::Geocode(ClientError::Network(
            NetworkError::ServerError {
                status: 401,
                message: "Invalid API key.".into(),
            },
        )));
        assert_eq!(timeout.user_message(), server.user_message());
        assert_eq!(unauthorized.user_message(), server.user_message());
    }

    #[test]
    fn detail_is_kept_for_logging() {
        let err = WeatherError::from(LookupError::Fetch(ClientError::Parse("bad json".into())));
        assert!(matches!(err, WeatherError::WeatherFetchFailed(_)));
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn no_match_maps_to_not_found() {
        let err = WeatherError::from(LookupError::NoMatch("xyzzy".into()));
        assert!(matches!(err, WeatherError::CoordinatesNotFound(ref q) if q == "xyzzy"));
        assert_eq!(err.user_message(), "Coordinates not found.");
    }
}
