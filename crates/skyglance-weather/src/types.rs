use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skyglance_core::NetworkError;

/// Coarse weather categories derived from OpenWeatherMap condition groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Windy,
}

impl WeatherCondition {
    /// Map a `weather[].main` label to a category.
    /// See: https://openweathermap.org/weather-conditions
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "clear" => Some(Self::Clear),
            "clouds" => Some(Self::Cloudy),
            "mist" | "fog" | "haze" | "smoke" | "dust" | "sand" | "ash" => Some(Self::Fog),
            "drizzle" => Some(Self::Drizzle),
            "rain" => Some(Self::Rain),
            "snow" => Some(Self::Snow),
            "thunderstorm" => Some(Self::Thunderstorm),
            "squall" | "tornado" => Some(Self::Windy),
            _ => None,
        }
    }

    /// Get icon name
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun",
            Self::Cloudy => "cloud",
            Self::Fog => "cloud_fog",
            Self::Drizzle => "cloud_rain",
            Self::Rain => "cloud_rain",
            Self::Snow => "cloud_snow",
            Self::Thunderstorm => "cloud_lightning",
            Self::Windy => "wind",
        }
    }
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// `main` block of the current weather response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainBlock {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionDescriptor {
    pub main: Option<String>,
}

/// `wind` block of the current weather response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindBlock {
    pub speed: Option<f64>,
}

/// Current weather payload as returned by the API, every block optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: Option<String>,
    pub main: Option<MainBlock>,
    #[serde(default)]
    pub weather: Vec<ConditionDescriptor>,
    pub wind: Option<WindBlock>,
}

/// A point-in-time weather reading. Replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: Option<String>,
    /// Degrees Celsius
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    /// Percent
    pub humidity: Option<u8>,
    /// Metres per second
    pub wind_speed: Option<f64>,
    pub condition: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn from_response(response: CurrentWeatherResponse, fetched_at: DateTime<Utc>) -> Self {
        let main = response.main.unwrap_or_default();
        Self {
            location_name: response.name.filter(|n| !n.is_empty()),
            temperature: main.temp,
            feels_like: main.feels_like,
            humidity: main.humidity.map(|h| h.round().clamp(0.0, 100.0) as u8),
            wind_speed: response.wind.and_then(|w| w.speed),
            condition: response.weather.into_iter().find_map(|w| w.main),
            fetched_at,
        }
    }

    /// Category of the condition label, if it is a known one
    pub fn condition_kind(&self) -> Option<WeatherCondition> {
        self.condition.as_deref().and_then(WeatherCondition::from_label)
    }
}

/// Weather client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}
