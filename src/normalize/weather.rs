//! Current-weather normalization.

use chrono::{DateTime, FixedOffset, Local};
use serde_json::Value;

use super::fields::{optional_i64, required_epoch, required_f64, required_str};
use crate::config::SunTimesZone;
use crate::error::BotError;
use crate::types::{ActionResult, WeatherReport};

/// Render an epoch as zero-padded `HH:MM`.
///
/// `SunTimesZone::Server` reads the instant in the evaluating machine's zone,
/// regardless of where the queried city is. `SunTimesZone::Location` applies
/// the provider's UTC offset and falls back to the server zone without one.
pub fn format_clock(epoch: i64, zone: SunTimesZone, utc_offset_secs: Option<i64>) -> Option<String> {
    let instant = DateTime::from_timestamp(epoch, 0)?;
    let offset = match (zone, utc_offset_secs) {
        (SunTimesZone::Location, Some(secs)) => i32::try_from(secs).ok().and_then(FixedOffset::east_opt),
        _ => None,
    };
    let clock = match offset {
        Some(offset) => instant.with_timezone(&offset).format("%H:%M").to_string(),
        None => instant.with_timezone(&Local).format("%H:%M").to_string(),
    };
    Some(clock)
}

fn clock_at(raw: &Value, pointer: &str, zone: SunTimesZone) -> Result<String, BotError> {
    let epoch = required_epoch(raw, pointer)?;
    format_clock(epoch, zone, optional_i64(raw, "/timezone"))
        .ok_or_else(|| BotError::Normalization(format!("timestamp out of range at '{pointer}'")))
}

/// Extract a [`WeatherReport`], failing on any missing required path.
pub fn try_current_weather(raw: &Value, location: &str, zone: SunTimesZone) -> Result<WeatherReport, BotError> {
    Ok(WeatherReport {
        location: location.to_string(),
        temperature: required_f64(raw, "/main/temp")?,
        condition: required_str(raw, "/weather/0/description")?.to_string(),
        wind_speed: required_f64(raw, "/wind/speed")?,
        sunrise_time: clock_at(raw, "/sys/sunrise", zone)?,
        sunset_time: clock_at(raw, "/sys/sunset", zone)?,
    })
}

/// The message used whenever current weather cannot be produced.
pub fn weather_error(location: &str) -> String {
    format!("Could not fetch weather for {location}")
}

/// Normalize a current-weather payload; never fails.
pub fn normalize_current_weather(raw: &Value, location: &str, zone: SunTimesZone) -> ActionResult {
    match try_current_weather(raw, location, zone) {
        Ok(report) => report.into(),
        Err(e) => {
            tracing::debug!(location, error = %e, "current weather payload incomplete");
            ActionResult::error(weather_error(location))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn oslo_payload() -> Value {
        json!({
            "main": { "temp": 5.2 },
            "weather": [{ "description": "clear sky" }],
            "wind": { "speed": 3.1 },
            "sys": { "sunrise": 1700000000, "sunset": 1700030000 },
            "timezone": 3600
        })
    }

    fn is_clock(s: &str) -> bool {
        let bytes = s.as_bytes();
        s.len() == 5
            && bytes[2] == b':'
            && s[..2].parse::<u8>().map(|h| h < 24).unwrap_or(false)
            && s[3..].parse::<u8>().map(|m| m < 60).unwrap_or(false)
    }

    #[test]
    fn server_zone_yields_five_char_clock() {
        let result = normalize_current_weather(&oslo_payload(), "Oslo", SunTimesZone::Server);
        let report = match result {
            ActionResult::Weather(report) => report,
            other => panic!("expected weather report, got {other:?}"),
        };
        assert_eq!(report.location, "Oslo");
        assert_eq!(report.temperature, 5.2);
        assert_eq!(report.condition, "clear sky");
        assert_eq!(report.wind_speed, 3.1);
        assert!(is_clock(&report.sunrise_time), "{}", report.sunrise_time);
        assert!(is_clock(&report.sunset_time), "{}", report.sunset_time);
    }

    #[test]
    fn location_zone_applies_provider_offset() {
        let report = try_current_weather(&oslo_payload(), "Oslo", SunTimesZone::Location).unwrap();
        assert_eq!(report.sunrise_time, "23:13");
        assert_eq!(report.sunset_time, "07:33");
    }

    #[test]
    fn location_zone_without_offset_matches_server_zone() {
        let mut raw = oslo_payload();
        raw.as_object_mut().unwrap().remove("timezone");
        let server = try_current_weather(&raw, "Oslo", SunTimesZone::Server).unwrap();
        let location = try_current_weather(&raw, "Oslo", SunTimesZone::Location).unwrap();
        assert_eq!(server.sunrise_time, location.sunrise_time);
    }

    #[test]
    fn integer_temperature_is_accepted() {
        let mut raw = oslo_payload();
        raw["main"]["temp"] = json!(-3);
        let report = try_current_weather(&raw, "Oslo", SunTimesZone::Server).unwrap();
        assert_eq!(report.temperature, -3.0);
    }

    #[test]
    fn missing_required_path_becomes_error_result() {
        let mut raw = oslo_payload();
        raw.as_object_mut().unwrap().remove("sys");
        let result = normalize_current_weather(&raw, "Oslo", SunTimesZone::Server);
        assert_eq!(result, ActionResult::error("Could not fetch weather for Oslo"));
    }

    #[test]
    fn empty_weather_array_becomes_error_result() {
        let mut raw = oslo_payload();
        raw["weather"] = json!([]);
        assert!(normalize_current_weather(&raw, "Oslo", SunTimesZone::Server).is_error());
    }
}
