//! Centralized error types for Skyglance.
//!
//! This module provides a typed error hierarchy that:
//! - Separates "nothing matched" from "the request failed"
//! - Provides user-friendly messages suitable for the display surface
//! - Preserves full error context for logging

use thiserror::Error;

/// Errors that stop the widget.
///
/// Use `user_message()` to get a message fit for the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Io(_) => "Terminal input or output failed.",
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

/// Weather lookup errors, one per stage of the search pipeline.
///
/// The user message collapses every transport, status and
/// parse failure of a stage into one generic sentence.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The geocoder answered with an empty candidate list.
    #[error("No coordinates found for: {0}")]
    CoordinatesNotFound(String),

    #[error("Geocoding request failed: {0}")]
    GeocodeFailed(String),

    #[error("Weather request failed: {0}")]
    WeatherFetchFailed(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CoordinatesNotFound(_) => "Coordinates not found.",
            WeatherError::GeocodeFailed(_) => {
                "Failed to fetch coordinates. Please try again."
            }
            WeatherError::WeatherFetchFailed(_) => {
                "Failed to fetch weather data. Please try again."
            }
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_messages_are_per_stage() {
        let messages = [
            WeatherError::CoordinatesNotFound("x".into()).user_message(),
            WeatherError::GeocodeFailed("x".into()).user_message(),
            WeatherError::WeatherFetchFailed("x".into()).user_message(),
        ];

        assert!(messages.iter().all(|m| !m.is_empty()));
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }

    #[test]
    fn test_weather_messages_hide_detail() {
        let err = WeatherError::GeocodeFailed("HTTP 401 Unauthorized".into());
        assert!(!err.user_message().contains("401"));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert_eq!(app_err.user_message(), "Terminal input or output failed.");
        assert!(app_err.to_string().contains("closed"));
    }
}
