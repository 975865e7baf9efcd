//! Text rendering of the display surface.

use skyglance_weather::WeatherSnapshot;

use crate::controller::{Screen, WeatherController};

pub const PLACEHOLDER: &str = "Type a place name and press Enter.";
const MISSING: &str = "--";

pub fn render(controller: &WeatherController) -> String {
    match controller.screen() {
        Screen::Error(message) => format!("Error: {}", message),
        Screen::Weather(snapshot) => render_snapshot(snapshot),
        Screen::Empty => PLACEHOLDER.to_string(),
    }
}

fn render_snapshot(snapshot: &WeatherSnapshot) -> String {
    let degrees = |v: Option<f64>| v.map_or(MISSING.to_string(), |t| format!("{:.1} °C", t));

    let condition = match (snapshot.condition.as_deref(), snapshot.condition_kind()) {
        (Some(label), Some(kind)) => format!("{} [{}]", label, kind.icon_name()),
        (Some(label), None) => label.to_string(),
        (None, _) => MISSING.to_string(),
    };

    [
        snapshot
            .location_name
            .as_deref()
            .unwrap_or("Unknown location")
            .to_string(),
        format!("  Temperature: {}", degrees(snapshot.temperature)),
        format!("  Feels like:  {}", degrees(snapshot.feels_like)),
        format!(
            "  Humidity:    {}",
            snapshot
                .humidity
                .map_or(MISSING.to_string(), |h| format!("{}%", h))
        ),
        format!(
            "  Wind:        {}",
            snapshot
                .wind_speed
                .map_or(MISSING.to_string(), |w| format!("{:.1} m/s", w))
        ),
        format!("  Condition:   {}", condition),
        format!("  Updated:     {}", snapshot.fetched_at.format("%H:%M UTC")),
    ]
    .join("\n")
}
