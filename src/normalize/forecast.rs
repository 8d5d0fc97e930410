//! Five-day forecast normalization and day labeling.
//!
//! The provider samples every three hours. One sample per day is kept: the
//! one stamped `12:00:00`, in source order, capped at five days.

use chrono::{NaiveDate, NaiveDateTime, Timelike, Utc};
use serde_json::Value;

use super::fields::{optional_f64, required_f64, required_str};
use crate::error::BotError;
use crate::types::{ActionResult, ForecastDay, ForecastReport};

/// Maximum number of days in a forecast.
pub const MAX_FORECAST_DAYS: usize = 5;

const SAMPLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn is_midday(at: &NaiveDateTime) -> bool {
    at.hour() == 12 && at.minute() == 0 && at.second() == 0
}

/// Select the midday samples from a forecast `list`, keeping source order
/// and at most [`MAX_FORECAST_DAYS`].
///
/// Samples without a parseable `dt_txt` are skipped.
pub fn midday_samples(list: &[Value]) -> Vec<(NaiveDateTime, &Value)> {
    list.iter()
        .filter_map(|item| {
            let stamp = item.get("dt_txt")?.as_str()?;
            match NaiveDateTime::parse_from_str(stamp, SAMPLE_TIMESTAMP_FORMAT) {
                Ok(at) => Some((at, item)),
                Err(e) => {
                    tracing::debug!(stamp, error = %e, "skipping forecast sample with bad timestamp");
                    None
                }
            }
        })
        .filter(|(at, _)| is_midday(at))
        .take(MAX_FORECAST_DAYS)
        .collect()
}

/// `"Today"` when `date` is `today`, otherwise the full weekday name.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else {
        date.format("%A").to_string()
    }
}

fn forecast_day(at: NaiveDateTime, item: &Value, today: NaiveDate) -> Result<ForecastDay, BotError> {
    Ok(ForecastDay {
        day: day_label(at.date(), today),
        temp: required_f64(item, "/main/temp")?,
        condition: required_str(item, "/weather/0/description")?.to_string(),
        pop: optional_f64(item, "/pop", 0.0),
        wind_speed: required_f64(item, "/wind/speed")?,
    })
}

/// Build a [`ForecastReport`] labeled relative to `today`.
pub fn normalize_forecast_on(raw: &Value, location: &str, today: NaiveDate) -> Result<ForecastReport, BotError> {
    let list = raw
        .get("list")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let forecast = midday_samples(list)
        .into_iter()
        .map(|(at, item)| forecast_day(at, item, today))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ForecastReport {
        location: location.to_string(),
        forecast,
    })
}

/// The message used whenever a forecast cannot be produced.
pub fn forecast_error(location: &str) -> String {
    format!("Could not fetch 5-day forecast for {location}")
}

/// Normalize a forecast payload against the current UTC date; never fails.
pub fn normalize_forecast(raw: &Value, location: &str) -> ActionResult {
    let today = Utc::now().date_naive();
    match normalize_forecast_on(raw, location, today) {
        Ok(report) => report.into(),
        Err(e) => {
            tracing::debug!(location, error = %e, "forecast payload incomplete");
            ActionResult::error(forecast_error(location))
        }
    }
}
