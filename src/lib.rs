//! Library behind the `skycast` binary.
//!
//! The pipeline is strictly sequential: parse the location token, geocode it
//! to coordinates, fetch current conditions plus the daily forecast, print.

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod location;
pub mod weather_client;
