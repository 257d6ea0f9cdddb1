use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// Letters, spaces and periods, a comma, then a two-letter US state code.
static CITY_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z. ]+\s*,\s*[a-z]{2}$").expect("pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: String,
}

/// A parsed location plus the effective forecast flag, since the `forecast`
/// keyword overrides whatever the second argument said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub location: Location,
    pub forecast: bool,
}

/// Resolve the location token into a city/state pair.
///
/// The literal keyword `forecast` (any case) maps to the built-in default
/// location with forecast mode forced on. Anything else must look like
/// "city,state". Whitespace around the comma is kept as split, not trimmed;
/// the geocoder tolerates it and trimming here would change observed output.
pub fn resolve(token: &str, forecast: bool) -> Result<Lookup, Error> {
    if token.eq_ignore_ascii_case("forecast") {
        return Ok(Lookup {
            location: Location {
                city: "Fritch".to_string(),
                state: "tx".to_string(),
            },
            forecast: true,
        });
    }

    if !CITY_STATE.is_match(token) {
        return Err(Error::InvalidFormat);
    }

    let Some((city, state)) = token.split_once(',') else {
        return Err(Error::InvalidFormat);
    };

    Ok(Lookup {
        location: Location {
            city: city.to_string(),
            state: state.to_string(),
        },
        forecast,
    })
}
