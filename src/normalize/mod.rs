//! Provider payload normalization into the planner-facing schemas.
//!
//! Field policy, per schema:
//!
//! | schema          | required paths                                              | defaulted             |
//! |-----------------|-------------------------------------------------------------|-----------------------|
//! | current weather | `main.temp`, `weather[0].description`, `wind.speed`, `sys.sunrise`, `sys.sunset` | none |
//! | forecast sample | `main.temp`, `weather[0].description`, `wind.speed`         | `pop` → `0`           |
//! | quote           | none                                                        | `quote`, `author`     |
//!
//! A missing required path is a normalization failure, which the action layer
//! reports as an `ErrorResult`. A missing `list` in a forecast payload is an
//! empty forecast.

pub mod fields;
pub mod forecast;
pub mod quote;
pub mod weather;

pub use forecast::{day_label, midday_samples, normalize_forecast, normalize_forecast_on};
pub use quote::normalize_quote;
pub use weather::{format_clock, normalize_current_weather};
