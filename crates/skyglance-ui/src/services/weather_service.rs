//! Weather backend: async geocoding and weather fetching.
//! All network work runs off the event loop; results come back via mpsc,
//! tagged with the ticket they were issued for.

use std::sync::Arc;

use skyglance_weather::{ClientError, GeoMatch, WeatherApi, WeatherSnapshot};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::controller::{FetchTicket, SearchTicket};

/// Why a lookup did not produce a snapshot
#[derive(Debug)]
pub enum LookupError {
    /// The geocoder answered with no candidates for this query
    NoMatch(String),
    Geocode(ClientError),
    Fetch(ClientError),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::NoMatch(q) => write!(f, "No match for {:?}", q),
            LookupError::Geocode(e) => write!(f, "Geocoding error: {}", e),
            LookupError::Fetch(e) => write!(f, "Weather error: {}", e),
        }
    }
}

impl std::error::Error for LookupError {}

/// Messages sent from async operations back to the event loop
#[derive(Debug)]
pub enum WeatherServiceMessage {
    GeocodeDone {
        ticket: SearchTicket,
        result: Result<Vec<GeoMatch>, ClientError>,
    },
    FetchDone {
        ticket: FetchTicket,
        result: Result<WeatherSnapshot, ClientError>,
    },
}

/// Request geocoding for a dispatched search.
/// Sends `GeocodeDone` on the channel when complete.
pub fn request_geocode(
    runtime: &Handle,
    tx: &UnboundedSender<WeatherServiceMessage>,
    api: Arc<dyn WeatherApi>,
    ticket: SearchTicket,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = api.geocode(&ticket.query).await;
        if tx
            .send(WeatherServiceMessage::GeocodeDone { ticket, result })
            .is_err()
        {
            tracing::debug!("Event loop gone; dropping geocode result");
        }
    });
}

/// Request current weather for resolved coordinates.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    runtime: &Handle,
    tx: &UnboundedSender<WeatherServiceMessage>,
    api: Arc<dyn WeatherApi>,
    ticket: FetchTicket,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = api.current_weather(ticket.coordinates).await;
        if tx
            .send(WeatherServiceMessage::FetchDone { ticket, result })
            .is_err()
        {
            tracing::debug!("Event loop gone; dropping weather result");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skyglance_weather::Coordinates;

    struct FixedApi;

    #[async_trait]
    impl WeatherApi for FixedApi {
        async fn geocode(&self, _place: &str) -> Result<Vec<GeoMatch>, ClientError> {
            Ok(vec![GeoMatch {
                lat: 1.5,
                lon: 2.5,
                name: None,
                state: None,
                country: None,
            }])
        }

        async fn current_weather(
            &self,
            _coordinates: Coordinates,
        ) -> Result<WeatherSnapshot, ClientError> {
            Err(ClientError::Parse("unexpected".into()))
        }
    }

    #[test]
    fn lookup_error_display() {
        assert!(LookupError::NoMatch("Atlantis".into()).to_string().contains("Atlantis"));
        assert!(LookupError::Geocode(ClientError::Parse("x".into()))
            .to_string()
            .contains("Geocoding"));
        assert!(LookupError::Fetch(ClientError::Parse("x".into()))
            .to_string()
            .contains("Weather"));
    }

    #[tokio::test]
    async fn geocode_result_carries_ticket() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let ticket = SearchTicket {
            generation: 7,
            query: "Somewhere".into(),
        };

        request_geocode(&Handle::current(), &tx, Arc::new(FixedApi), ticket);

        match rx.recv().await {
            Some(WeatherServiceMessage::GeocodeDone { ticket, result }) => {
                assert_eq!(ticket.generation, 7);
                assert_eq!(ticket.query, "Somewhere");
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_failure_is_delivered() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let ticket = FetchTicket {
            generation: 3,
            coordinates: Coordinates::new(1.5, 2.5),
        };

        request_fetch(&Handle::current(), &tx, Arc::new(FixedApi), ticket);

        match rx.recv().await {
            Some(WeatherServiceMessage::FetchDone { ticket, result }) => {
                assert_eq!(ticket.generation, 3);
                assert!(result.is_err());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
