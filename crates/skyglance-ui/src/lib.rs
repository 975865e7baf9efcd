//! Terminal weather widget: search input, state controller and display.

pub mod app;
pub mod controller;
mod error_mapping;
pub mod input;
pub mod services;
pub mod view;

pub use app::{run, WeatherApp};
pub use controller::{FetchTicket, Screen, SearchTicket, WeatherController};
pub use input::InputEvent;
