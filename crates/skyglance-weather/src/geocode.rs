//! Forward geocoding results: place name to candidate coordinates.

use crate::types::Coordinates;
use serde::{Deserialize, Serialize};

/// One candidate returned by the direct geocoding endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoMatch {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl GeoMatch {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }

    /// Human-readable label such as "Springfield, Illinois".
    /// Falls back to the coordinates when the match carries no name.
    pub fn label(&self) -> String {
        let Some(place) = self.name.as_deref().filter(|n| !n.is_empty()) else {
            return self.coordinates().to_string();
        };

        // Prefer state over country for disambiguation
        let suffix = self
            .state
            .as_deref()
            .filter(|s| !s.is_empty() && *s != place)
            .or_else(|| {
                self.country
                    .as_deref()
                    .filter(|c| !c.is_empty() && *c != place)
            });

        match suffix {
            Some(s) => format!("{}, {}", place, s),
            None => place.to_string(),
        }
    }
}
