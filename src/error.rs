use thiserror::Error;

/// Everything that can go wrong between the command line and the printed
/// report. `WeatherFetch` is deliberately separate from `RequestFailed`:
/// geocoding failures abort the run, weather-fetch failures are logged by the
/// app and swallowed, and the distinct variant keeps that asymmetry visible at
/// the call site.
#[derive(Debug, Error)]
pub enum Error {
    // The trailing space is part of the published message.
    #[error("You must submit your location in format of 'city,state' ")]
    InvalidFormat,

    #[error("Invalid city/state")]
    LocationNotFound,

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("weather request failed: {0}")]
    WeatherFetch(String),
}
