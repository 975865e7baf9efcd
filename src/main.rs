use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use skyglance_core::Config;
use skyglance_ui::{run, WeatherApp};
use skyglance_weather::OpenWeatherClient;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize core
    skyglance_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    let client = OpenWeatherClient::from_config(&config.weather)
        .context("Failed to create weather client")?;

    tracing::info!("Skyglance started");

    println!("Skyglance - current weather lookup");
    println!("Type a place name and press Enter (:type <text>, :search, :quit)");

    let mut app = WeatherApp::new(Arc::new(client), tokio::runtime::Handle::current());
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    // Detail goes to the log, the short message to the terminal
    if let Err(e) = run(&mut app, stdin, &mut stdout).await {
        tracing::error!("Widget stopped: {}", e);
        eprintln!("{}", e.user_message());
        return Ok(ExitCode::FAILURE);
    }

    tracing::info!("Skyglance stopped");
    Ok(ExitCode::SUCCESS)
}
