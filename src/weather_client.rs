use std::time::Instant;

use reqwest::{Client as HttpClient, IntoUrl, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::{config::AppConfig, error::Error, location::Location};

const GEOCODE_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
const ONE_CALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// The geocoder has been observed returning both a candidate array and a bare
/// object. Normalized here so callers only ever see `Coordinates`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeoResponse {
    Candidates(Vec<Coordinates>),
    Single(Coordinates),
}

impl GeoResponse {
    fn into_first(self) -> Option<Coordinates> {
        match self {
            GeoResponse::Candidates(candidates) => candidates.into_iter().next(),
            GeoResponse::Single(coordinates) => Some(coordinates),
        }
    }
}

/// One-call payload: current conditions, daily forecast, optional alerts.
#[derive(Debug, Deserialize)]
pub struct OneCall {
    pub current: Current,
    pub daily: Vec<Daily>,
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
}

#[derive(Debug, Deserialize)]
pub struct Current {
    pub temp: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub wind_deg: f64,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct Daily {
    pub dt: i64,
    pub temp: DayTemp,
    pub humidity: u8,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct DayTemp {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Alert {
    pub event: String,
    pub description: String,
}

/// A one-call payload with the looked-up city and state carried alongside,
/// so the display layer never has to re-derive where the data came from.
#[derive(Debug)]
pub struct WeatherReport {
    pub city: String,
    pub state: String,
    pub data: OneCall,
}

pub struct Client {
    api_key: String,
    client: HttpClient,
}

impl Client {
    pub fn new(config: &AppConfig) -> Self {
        Client {
            api_key: config.api_key().clone(),
            client: HttpClient::new(),
        }
    }

    /// Resolve a city/state pair to coordinates. The country is pinned to US
    /// whenever a state code is present.
    pub async fn geocode(&self, location: &Location) -> Result<Coordinates, Error> {
        let query = if location.state.is_empty() {
            location.city.clone()
        } else {
            format!("{},{},US", location.city, location.state)
        };

        let response: GeoResponse = self
            .get_response(GEOCODE_URL, &[("q", query.as_str())], "geocode")
            .await?;

        response.into_first().ok_or(Error::LocationNotFound)
    }

    /// Fetch current conditions plus the daily forecast for the coordinates.
    ///
    /// Errors come back as `Error::WeatherFetch`; unlike a geocoding failure,
    /// the app treats these as non-fatal.
    pub async fn one_call(
        &self,
        coordinates: Coordinates,
        location: Location,
    ) -> Result<WeatherReport, Error> {
        let data: OneCall = self
            .get_response(
                ONE_CALL_URL,
                &[
                    ("lat", coordinates.lat.to_string().as_str()),
                    ("lon", coordinates.lon.to_string().as_str()),
                    ("units", "imperial"),
                ],
                "one_call",
            )
            .await
            .map_err(|e| Error::WeatherFetch(e.to_string()))?;

        Ok(WeatherReport {
            city: location.city,
            state: location.state,
            data,
        })
    }

    async fn get_response<T: DeserializeOwned, U: Serialize + Sized>(
        &self,
        url: impl IntoUrl,
        query: &U,
        identifier: &'static str,
    ) -> Result<T, Error> {
        let _timing = RequestTimer::new(identifier);
        let request = self
            .client
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())]);

        let response = match request.send().await {
            Ok(response) => {
                if response.status() == StatusCode::UNAUTHORIZED {
                    return Err(Error::Unauthorized("invalid API key".to_string()));
                }

                response
            }
            Err(e) => return Err(Error::RequestFailed(e.to_string())),
        };

        match response.json::<T>().await {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(Error::RequestFailed(e.to_string())),
        }
    }
}

/// Logs how long a request took when dropped.
struct RequestTimer {
    start: Instant,
    identifier: &'static str,
}

impl RequestTimer {
    fn new(identifier: &'static str) -> Self {
        RequestTimer {
            start: Instant::now(),
            identifier,
        }
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_millis();
        debug!("{}, elapsed: {}ms", self.identifier, elapsed);
    }
}
