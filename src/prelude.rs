//! Convenience re-exports for common use.

pub use crate::actions::{ActionKind, ActionRegistry, ActionRequest};
pub use crate::config::{BotConfig, SunTimesZone};
pub use crate::error::{BotError, Result};
pub use crate::provider::{FetchRequest, HttpAdapter, JsonFetcher};
pub use crate::runtime::{ActivitySink, Bot, FeedbackEvent, FeedbackSink};
pub use crate::types::{ActionResult, ErrorResult, ForecastDay, ForecastReport, Quote, WeatherReport};
