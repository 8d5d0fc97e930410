//! Action result schemas handed back to the planner.
//!
//! Every successful result carries all of its keys; absent upstream fields
//! are defaulted during normalization rather than omitted here.

use serde::{Deserialize, Serialize};

/// Current conditions for one location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    /// Degrees in the requested unit system.
    pub temperature: f64,
    pub condition: String,
    pub wind_speed: f64,
    /// Zero-padded 24-hour `HH:MM`.
    pub sunrise_time: String,
    /// Zero-padded 24-hour `HH:MM`.
    pub sunset_time: String,
}

/// One labeled day of a forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    /// `"Today"` or a full weekday name.
    pub day: String,
    pub temp: f64,
    pub condition: String,
    /// Probability of precipitation, `0.0..=1.0`.
    pub pop: f64,
    pub wind_speed: f64,
}

/// Up to five midday snapshots in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastReport {
    pub location: String,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    pub const FALLBACK_TEXT: &'static str = "No quote found.";
    pub const FALLBACK_AUTHOR: &'static str = "Unknown";

    pub fn fallback() -> Self {
        Self {
            quote: Self::FALLBACK_TEXT.to_string(),
            author: Self::FALLBACK_AUTHOR.to_string(),
        }
    }
}

/// A non-fatal failure the planner narrates to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Any value an action can hand back to the planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ActionResult {
    Weather(WeatherReport),
    Forecast(ForecastReport),
    Quote(Quote),
    Error(ErrorResult),
}

impl ActionResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorResult::new(message))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Serialize to the JSON string the planner receives.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<WeatherReport> for ActionResult {
    fn from(report: WeatherReport) -> Self {
        Self::Weather(report)
    }
}

impl From<ForecastReport> for ActionResult {
    fn from(report: ForecastReport) -> Self {
        Self::Forecast(report)
    }
}

impl From<Quote> for ActionResult {
    fn from(quote: Quote) -> Self {
        Self::Quote(quote)
    }
}

impl From<ErrorResult> for ActionResult {
    fn from(error: ErrorResult) -> Self {
        Self::Error(error)
    }
}
