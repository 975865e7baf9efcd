//! Weather lookups for Skyglance
//!
//! Resolves place names to coordinates and fetches current conditions from
//! the OpenWeatherMap API.

pub mod client;
pub mod geocode;
pub mod types;

pub use client::{OpenWeatherClient, WeatherApi};
pub use geocode::GeoMatch;
pub use types::*;
