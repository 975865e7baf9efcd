//! OpenWeatherMap HTTP client: direct geocoding and current weather.
//!
//! No retries and no timeout beyond what the transport applies by default.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use skyglance_core::config::{DEFAULT_CURRENT_WEATHER_URL, DEFAULT_GEOCODING_URL};
use skyglance_core::{NetworkError, ReqwestErrorExt, WeatherConfig};
use url::Url;

use crate::geocode::GeoMatch;
use crate::types::{ClientError, Coordinates, CurrentWeatherResponse, WeatherSnapshot};

const USER_AGENT: &str = concat!("skyglance/", env!("CARGO_PKG_VERSION"));

/// The two lookups the search pipeline needs.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Resolve a place name to at most one candidate. An empty list means no match.
    async fn geocode(&self, place: &str) -> Result<Vec<GeoMatch>, ClientError>;

    /// Fetch current weather in metric units.
    async fn current_weather(&self, coordinates: Coordinates)
        -> Result<WeatherSnapshot, ClientError>;
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Arc<Client>,
    api_key: String,
    geocoding_url: Url,
    current_weather_url: Url,
}

impl OpenWeatherClient {
    /// Create a client against the public OpenWeatherMap endpoints
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_endpoints(api_key, DEFAULT_GEOCODING_URL, DEFAULT_CURRENT_WEATHER_URL)
    }

    pub fn from_config(config: &WeatherConfig) -> Result<Self, ClientError> {
        Self::with_endpoints(
            config.api_key_or_empty(),
            &config.geocoding_url,
            &config.current_weather_url,
        )
    }

    pub fn with_endpoints(
        api_key: impl Into<String>,
        geocoding_url: &str,
        current_weather_url: &str,
    ) -> Result<Self, ClientError> {
        let parse = |raw: &str| {
            Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
        };

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Network(e.into_network_error()))?;

        Ok(Self {
            client: Arc::new(client),
            api_key: api_key.into(),
            geocoding_url: parse(geocoding_url)?,
            current_weather_url: parse(current_weather_url)?,
        })
    }

    /// GET `url` with `query` plus `appid`, and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .get(url.clone())
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.into_network_error()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.into_network_error()))?;

        if !status.is_success() {
            return Err(NetworkError::ServerError {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    async fn geocode(&self, place: &str) -> Result<Vec<GeoMatch>, ClientError> {
        tracing::debug!("Geocoding {:?}", place);

        let query = [("q", place.to_string()), ("limit", "1".to_string())];
        let matches: Vec<GeoMatch> = self.get_json(&self.geocoding_url, &query).await?;

        tracing::debug!("Geocoder returned {} candidate(s)", matches.len());
        Ok(matches)
    }

    async fn current_weather(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherSnapshot, ClientError> {
        tracing::debug!("Fetching current weather for {}", coordinates);

        let query = [
            ("lat", coordinates.latitude.to_string()),
            ("lon", coordinates.longitude.to_string()),
            ("units", "metric".to_string()),
        ];
        let response: CurrentWeatherResponse =
            self.get_json(&self.current_weather_url, &query).await?;

        Ok(WeatherSnapshot::from_response(response, chrono::Utc::now()))
    }
}
