use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use crate::{
    config::AppConfig,
    display,
    error::Error,
    location,
    weather_client::{Client, WeatherReport},
};

pub fn init_tracing(level: Level) {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

/// Truthiness of the optional second positional argument.
pub fn is_truthy(arg: Option<&str>) -> bool {
    match arg {
        Some(value) => !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false"),
        None => false,
    }
}

/// Run the whole pipeline once: resolve the location, geocode it, fetch the
/// weather, print.
///
/// Parse and geocoding errors propagate to the caller. A failed weather fetch
/// is only logged; the run still counts as a success and the process exits 0.
pub async fn run(config: &AppConfig, token: Option<&str>, forecast: bool) -> Result<(), Error> {
    let token = token.unwrap_or_else(|| config.default_location().as_str());
    let lookup = location::resolve(token, forecast)?;

    let client = Client::new(config);
    let coordinates = client.geocode(&lookup.location).await?;

    report(client.one_call(coordinates, lookup.location).await, lookup.forecast)
}

/// Print the fetched weather, or log the failure and move on. Fetch errors
/// never bubble past this point, so the process still exits 0.
fn report(result: Result<WeatherReport, Error>, forecast: bool) -> Result<(), Error> {
    match result {
        Ok(report) => {
            display::print_current(&report);
            if forecast {
                display::print_forecast(&report);
            }
            Ok(())
        }
        Err(e) => {
            error!("error getting weather data: {e}");
            Ok(())
        }
    }
}
