//! `getCurrentWeather`.

use strum::{Display, EnumString};

use super::{absorb, ActionArguments, ActionContext, ActionKind};
use crate::error::Result;
use crate::normalize::weather::{normalize_current_weather, weather_error};
use crate::provider::http::endpoint;
use crate::provider::FetchRequest;
use crate::types::ActionResult;

/// Unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    /// `"c"` (any case, the default when absent) is metric; anything else is imperial.
    pub fn from_unit_argument(unit: Option<&str>) -> Self {
        match unit.map(str::to_ascii_lowercase).as_deref() {
            None | Some("c") => Self::Metric,
            Some(_) => Self::Imperial,
        }
    }
}

pub async fn get_current_weather(ctx: &ActionContext<'_>, args: &ActionArguments) -> Result<ActionResult> {
    // Presence was checked against the tool schema before dispatch.
    let location = args.get_text("location")?;
    let units = Units::from_unit_argument(args.get_text_opt("unit").as_deref());

    let request = FetchRequest::builder()
        .url(endpoint(&ctx.config.weather_base_url, "weather"))
        .query(vec![
            ("q".to_string(), location.clone()),
            ("units".to_string(), units.to_string()),
            ("appid".to_string(), ctx.config.openweather_api_key.clone()),
        ])
        .build();

    match ctx.fetcher.fetch_json(&request).await {
        Ok(raw) => Ok(normalize_current_weather(&raw, &location, ctx.config.sun_times_zone)),
        Err(e) => absorb(ActionKind::GetCurrentWeather, e, weather_error(&location)),
    }
}
