//! Search state container.
//!
//! State only changes through the transition functions below. Every search
//! bumps a generation counter; results carry the generation they were issued
//! under and are discarded if a newer search has started since.

use skyglance_core::WeatherError;
use skyglance_weather::{ClientError, Coordinates, GeoMatch, WeatherSnapshot};

use crate::services::LookupError;

/// A dispatched search, to be handed to the geocoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// A resolved search, to be handed to the weather fetch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    /// Result belonged to a superseded search; nothing changed
    Stale,
    /// Coordinates stored; fetch weather with this ticket
    Resolved(FetchTicket),
    NotFound,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherOutcome {
    Stale,
    Updated,
    Failed,
}

/// What the display surface should show. Never both an error and weather.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Error(&'a str),
    Weather(&'a WeatherSnapshot),
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherController {
    query: String,
    coordinates: Option<Coordinates>,
    snapshot: Option<WeatherSnapshot>,
    error: Option<String>,
    generation: u64,
}

impl WeatherController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn screen(&self) -> Screen<'_> {
        match (&self.error, &self.snapshot) {
            (Some(message), _) => Screen::Error(message),
            (None, Some(snapshot)) => Screen::Weather(snapshot),
            (None, None) => Screen::Empty,
        }
    }

    /// Dispatch a search for the current query. The query is cleared whatever
    /// the outcome, and the query text is not validated.
    pub fn on_search(&mut self) -> SearchTicket {
        self.generation += 1;
        let query = std::mem::take(&mut self.query);
        tracing::debug!("Search #{} for {:?}", self.generation, query);
        SearchTicket {
            generation: self.generation,
            query,
        }
    }

    pub fn on_geocode_result(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<GeoMatch>, ClientError>,
    ) -> GeocodeOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping geocode result for superseded search #{}",
                ticket.generation
            );
            return GeocodeOutcome::Stale;
        }

        match result {
            Ok(matches) => match matches.first() {
                Some(first) => {
                    let coordinates = first.coordinates();
                    tracing::info!(
                        "Resolved {:?} to {} ({})",
                        ticket.query,
                        first.label(),
                        coordinates
                    );
                    self.coordinates = Some(coordinates);
                    self.error = None;
                    GeocodeOutcome::Resolved(FetchTicket {
                        generation: ticket.generation,
                        coordinates,
                    })
                }
                None => {
                    self.on_error(LookupError::NoMatch(ticket.query.clone()).into());
                    GeocodeOutcome::NotFound
                }
            },
            Err(e) => {
                self.on_error(LookupError::Geocode(e).into());
                GeocodeOutcome::Failed
            }
        }
    }

    pub fn on_weather_result(
        &mut self,
        ticket: &FetchTicket,
        result: Result<WeatherSnapshot, ClientError>,
    ) -> WeatherOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping weather result for superseded search #{}",
                ticket.generation
            );
            return WeatherOutcome::Stale;
        }

        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.error = None;
                WeatherOutcome::Updated
            }
            Err(e) => {
                // Previous snapshot stays as it was
                self.on_error(LookupError::Fetch(e).into());
                WeatherOutcome::Failed
            }
        }
    }

    /// Put a failure in the error slot. Only the user message is kept.
    pub fn on_error(&mut self, error: WeatherError) {
        match &error {
            WeatherError::CoordinatesNotFound(_) => tracing::info!("{}", error),
            _ => tracing::warn!("{}", error),
        }
        self.error = Some(error.user_message().to_string());
    }
}
