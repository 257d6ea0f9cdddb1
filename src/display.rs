use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone};
use colored::Colorize;

use crate::weather_client::{Alert, Daily, WeatherReport};

/// Compass labels for the eight 45-degree sectors, clockwise from north.
/// "Souteast" and "Soutwest" are misspelled on purpose: downstream scripts
/// match these labels verbatim.
const DIRECTIONS: [&str; 8] = [
    "North",
    "Northeast",
    "East",
    "Souteast",
    "South",
    "Soutwest",
    "West",
    "Northwest",
];

fn border() -> String {
    "*".repeat(80).bright_green().to_string()
}

/// Emoji for the short condition name; conditions outside the map get no
/// symbol rather than an error.
fn symbol(condition: &str) -> &'static str {
    match condition {
        "Clear" => "☀️",
        "Rain" => "☔",
        "Clouds" => "☁️",
        "Snow" => "❄️",
        "Drizzle" => "🌧️",
        "Thunderstorm" => "⛈️",
        _ => "",
    }
}

/// Bucket wind degrees into a compass direction. Sectors are 45 degrees wide,
/// offset by 22.5 so each label is centered on its heading; 360 wraps to
/// North.
fn deg_to_direction(degrees: f64) -> &'static str {
    let sector = (degrees / 45.0 + 0.5).floor() as usize;
    DIRECTIONS[sector % 8]
}

/// Uppercase the first character only, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_day(dt: i64) -> String {
    match Local.timestamp_opt(dt, 0).single() {
        Some(date) => render_day(&date),
        None => String::new(),
    }
}

fn render_day<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    // en-US style: "Friday, Jul 4"
    date.format("%A, %b %-d").to_string()
}

fn push_alerts(out: &mut String, alerts: Option<&[Alert]>) {
    let Some(alerts) = alerts else {
        let _ = writeln!(out, "{}", "No Alerts".red());
        return;
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "---ALERTS---".bright_red());
    let _ = writeln!(out);
    for alert in alerts {
        let _ = writeln!(out, "{}", alert.event.bright_yellow());
        let _ = writeln!(out, "{}", alert.description);
    }
}

/// The bordered current-conditions block, alerts included.
pub fn render_current(report: &WeatherReport) -> String {
    let current = &report.data.current;
    let condition = current
        .weather
        .first()
        .map(|w| w.main.as_str())
        .unwrap_or_default();
    let today = report.data.daily.first();

    let mut out = String::new();
    let _ = writeln!(out, "{}", border());
    let _ = writeln!(
        out,
        "{} {}, {}:",
        "CURRENT WEATHER FOR".bright_white(),
        capitalize(&report.city).cyan(),
        report.state.cyan()
    );
    let _ = writeln!(
        out,
        "Current Temperature: {}°F",
        current.temp.floor() as i64
    );
    if let Some(today) = today {
        let _ = writeln!(
            out,
            "Low: {} / High: {}",
            (today.temp.min.floor() as i64).to_string().bright_blue(),
            (today.temp.max.floor() as i64).to_string().bright_red()
        );
    }
    let _ = writeln!(
        out,
        "Wind Speed: {} mph {}",
        current.wind_speed.round() as i64,
        deg_to_direction(current.wind_deg)
    );
    let _ = writeln!(out, "Humidity: {}%", current.humidity);
    let _ = writeln!(out, "Description: {}  {}", symbol(condition), condition);
    push_alerts(&mut out, report.data.alerts.as_deref());
    let _ = writeln!(out, "{}", border());
    out
}

fn push_day(out: &mut String, day: &Daily) {
    let condition = day.weather.first();
    let main = condition.map(|w| w.main.as_str()).unwrap_or_default();
    let description = condition.map(|w| w.description.as_str()).unwrap_or_default();

    let _ = writeln!(out, "{}", border());
    let _ = writeln!(out, "Date: {}", format_day(day.dt));
    let _ = writeln!(
        out,
        "Low: {}°F / High: {}",
        (day.temp.min.floor() as i64).to_string().bright_blue(),
        (day.temp.max.floor() as i64).to_string().bright_red()
    );
    let _ = writeln!(out, "Humidity: {}%", day.humidity);
    let _ = writeln!(
        out,
        "Description: {}  {} - {}",
        symbol(main),
        main,
        description
    );
    let _ = writeln!(out);
}

/// The 7-day forecast block; extra daily entries beyond seven are ignored.
pub fn render_forecast(report: &WeatherReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Daily forecast:");
    for day in report.data.daily.iter().take(7) {
        push_day(&mut out, day);
    }
    out
}

pub fn print_current(report: &WeatherReport) {
    print!("{}", render_current(report));
}

pub fn print_forecast(report: &WeatherReport) {
    print!("{}", render_forecast(report));
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::weather_client::{Condition, Current, DayTemp, OneCall};

    fn plain() {
        colored::control::set_override(false);
    }

    fn sample_report(alerts: Option<Vec<Alert>>) -> WeatherReport {
        WeatherReport {
            city: "austin".to_string(),
            state: "tx".to_string(),
            data: OneCall {
                current: Current {
                    temp: 75.6,
                    humidity: 40,
                    wind_speed: 5.4,
                    wind_deg: 0.0,
                    weather: vec![Condition {
                        main: "Clear".to_string(),
                        description: "clear sky".to_string(),
                    }],
                },
                daily: vec![Daily {
                    dt: 1751630400,
                    temp: DayTemp {
                        min: 60.9,
                        max: 85.2,
                    },
                    humidity: 35,
                    weather: vec![Condition {
                        main: "Clouds".to_string(),
                        description: "scattered clouds".to_string(),
                    }],
                }],
                alerts,
            },
        }
    }

    #[test]
    fn direction_table_matches_the_eight_sectors() {
        let cases = [
            (0.0, "North"),
            (45.0, "Northeast"),
            (90.0, "East"),
            (135.0, "Souteast"),
            (180.0, "South"),
            (225.0, "Soutwest"),
            (270.0, "West"),
            (315.0, "Northwest"),
            (360.0, "North"),
        ];
        for (degrees, expected) in cases {
            assert_eq!(deg_to_direction(degrees), expected, "at {degrees} degrees");
        }
    }

    #[test]
    fn direction_sector_boundaries_round_toward_the_next_label() {
        assert_eq!(deg_to_direction(22.4), "North");
        assert_eq!(deg_to_direction(22.5), "Northeast");
        assert_eq!(deg_to_direction(350.0), "North");
    }

    #[test]
    fn known_conditions_map_to_symbols() {
        assert_eq!(symbol("Clear"), "☀️");
        assert_eq!(symbol("Rain"), "☔");
        assert_eq!(symbol("Thunderstorm"), "⛈️");
    }

    #[test]
    fn unknown_conditions_map_to_an_empty_symbol() {
        assert_eq!(symbol("Fog"), "");
        assert_eq!(symbol(""), "");
    }

    #[test]
    fn capitalize_touches_only_the_first_character() {
        assert_eq!(capitalize("austin"), "Austin");
        assert_eq!(capitalize("st. louis"), "St. louis");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn day_renders_weekday_month_and_day() {
        // 2025-07-04 12:00:00 UTC
        let date = Utc.timestamp_opt(1751630400, 0).single().expect("valid");
        assert_eq!(render_day(&date), "Friday, Jul 4");
    }

    #[test]
    fn current_block_lists_every_field() {
        plain();
        let rendered = render_current(&sample_report(None));

        assert!(rendered.contains("CURRENT WEATHER FOR Austin, tx:"));
        assert!(rendered.contains("Current Temperature: 75°F"));
        assert!(rendered.contains("Low: 60 / High: 85"));
        assert!(rendered.contains("Wind Speed: 5 mph North"));
        assert!(rendered.contains("Humidity: 40%"));
        assert!(rendered.contains("Description: ☀️  Clear"));
        assert!(rendered.contains("No Alerts"));
        assert!(rendered.contains(&"*".repeat(80)));
    }

    #[test]
    fn alerts_are_listed_in_source_order() {
        plain();
        let rendered = render_current(&sample_report(Some(vec![
            Alert {
                event: "Severe Thunderstorm Warning".to_string(),
                description: "Take shelter.".to_string(),
            },
            Alert {
                event: "Flash Flood Watch".to_string(),
                description: "Avoid low areas.".to_string(),
            },
        ])));

        assert!(!rendered.contains("No Alerts"));
        assert!(rendered.contains("---ALERTS---"));
        let warning = rendered
            .find("Severe Thunderstorm Warning")
            .expect("first alert present");
        let watch = rendered
            .find("Flash Flood Watch")
            .expect("second alert present");
        assert!(warning < watch);
    }

    #[test]
    fn forecast_shows_at_most_seven_days() {
        plain();
        let mut report = sample_report(None);
        let day = || Daily {
            dt: 1751630400,
            temp: DayTemp {
                min: 60.9,
                max: 85.2,
            },
            humidity: 35,
            weather: vec![Condition {
                main: "Rain".to_string(),
                description: "light rain".to_string(),
            }],
        };
        report.data.daily = (0..9).map(|_| day()).collect();

        let rendered = render_forecast(&report);
        assert!(rendered.starts_with("\nDaily forecast:"));
        assert_eq!(rendered.matches("Date:").count(), 7);
        assert!(rendered.contains("Low: 60°F / High: 85"));
        assert!(rendered.contains("Description: ☔  Rain - light rain"));
    }
}
