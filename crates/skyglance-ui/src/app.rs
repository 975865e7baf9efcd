//! Presentation root: owns the controller and drives the event loop.

use std::io::Write;
use std::sync::Arc;

use skyglance_core::AppError;
use skyglance_weather::WeatherApi;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::controller::{GeocodeOutcome, WeatherController, WeatherOutcome};
use crate::input::{parse_line, InputEvent};
use crate::services::{self, WeatherServiceMessage};
use crate::view;

pub struct WeatherApp {
    controller: WeatherController,
    api: Arc<dyn WeatherApi>,
    runtime: Handle,
    tx: UnboundedSender<WeatherServiceMessage>,
    rx: UnboundedReceiver<WeatherServiceMessage>,
    in_flight: usize,
}

impl WeatherApp {
    pub fn new(api: Arc<dyn WeatherApi>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            controller: WeatherController::new(),
            api,
            runtime,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn controller(&self) -> &WeatherController {
        &self.controller
    }

    /// True when no request is waiting for a result
    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }

    pub fn render(&self) -> String {
        view::render(&self.controller)
    }

    /// Apply one input event. Returns `false` when the user asked to quit.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Edit(text) => self.controller.set_query(text),
            InputEvent::Enter | InputEvent::ButtonClick => self.submit(),
            InputEvent::Quit => return false,
        }
        true
    }

    fn submit(&mut self) {
        let ticket = self.controller.on_search();
        self.in_flight += 1;
        services::request_geocode(&self.runtime, &self.tx, self.api.clone(), ticket);
    }

    /// Wait for the next service result
    pub async fn next_message(&mut self) -> Option<WeatherServiceMessage> {
        self.rx.recv().await
    }

    /// Feed a service result to the controller. Returns whether the display changed.
    pub fn handle_message(&mut self, message: WeatherServiceMessage) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        match message {
            WeatherServiceMessage::GeocodeDone { ticket, result } => {
                match self.controller.on_geocode_result(&ticket, result) {
                    GeocodeOutcome::Stale => false,
                    GeocodeOutcome::Resolved(fetch) => {
                        self.in_flight += 1;
                        services::request_fetch(&self.runtime, &self.tx, self.api.clone(), fetch);
                        true
                    }
                    GeocodeOutcome::NotFound | GeocodeOutcome::Failed => true,
                }
            }
            WeatherServiceMessage::FetchDone { ticket, result } => {
                self.controller.on_weather_result(&ticket, result) != WeatherOutcome::Stale
            }
        }
    }

    /// Process results until nothing is in flight, rendering after each change.
    pub async fn settle<W: Write>(&mut self, out: &mut W) -> Result<(), AppError> {
        while !self.is_idle() {
            let Some(message) = self.next_message().await else {
                break;
            };
            if self.handle_message(message) {
                writeln!(out, "{}", self.render())?;
            }
        }
        Ok(())
    }
}

/// Decode one raw input line. Bytes that are not UTF-8 become U+FFFD.
fn decode_line(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(line) => line.to_string(),
        Err(e) => {
            tracing::warn!("Input line is not valid UTF-8 ({}); replacing bad bytes", e);
            String::from_utf8_lossy(raw).into_owned()
        }
    }
}

/// Run the widget: read input lines, render to `out` whenever state changes.
///
/// End of input stops reading but waits for in-flight requests to finish.
pub async fn run<R, W>(app: &mut WeatherApp, mut input: R, out: &mut W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    // Bytes of a cancelled read stay here until the line completes
    let mut buf = Vec::new();
    writeln!(out, "{}", app.render())?;

    loop {
        tokio::select! {
            read = input.read_until(b'\n', &mut buf) => {
                let at_eof = read? == 0;
                if at_eof && buf.is_empty() {
                    break;
                }
                if !at_eof && buf.last() != Some(&b'\n') {
                    // Final line without a newline; the next read reports EOF
                    continue;
                }

                let line = decode_line(&buf);
                buf.clear();
                for event in parse_line(&line) {
                    if !app.handle_input(event) {
                        tracing::debug!("Quit requested");
                        return Ok(());
                    }
                }
                if at_eof {
                    break;
                }
            }
            Some(message) = app.next_message(), if !app.is_idle() => {
                if app.handle_message(message) {
                    writeln!(out, "{}", app.render())?;
                }
            }
        }
    }

    app.settle(out).await
}
