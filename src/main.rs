//! `skycast` binary: look up current conditions (and optionally a 7-day
//! forecast) for a US "city,state" location.

use clap::Parser;
use tracing::Level;

use skycast::{app, config::AppConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Location as "city,state" with a two-letter state code, or the keyword
    /// "forecast" for the built-in default with the forecast forced on.
    /// Falls back to the configured default location when omitted.
    location: Option<String>,

    /// Any truthy value ("1", "true", ...) adds the 7-day forecast block.
    forecast: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load("config.toml")?;

    app::init_tracing(match config.level().as_ref() {
        Some(level) => level.parse::<Level>().unwrap_or(Level::INFO),
        None => Level::INFO,
    });

    app::run(
        &config,
        args.location.as_deref(),
        app::is_truthy(args.forecast.as_deref()),
    )
    .await?;

    Ok(())
}
