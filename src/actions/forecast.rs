//! `get5DayForecast`.

use super::weather::Units;
use super::{absorb, ActionArguments, ActionContext, ActionKind};
use crate::error::Result;
use crate::normalize::forecast::{forecast_error, normalize_forecast};
use crate::provider::http::endpoint;
use crate::provider::FetchRequest;
use crate::types::ActionResult;

pub async fn get_5day_forecast(ctx: &ActionContext<'_>, args: &ActionArguments) -> Result<ActionResult> {
    // Presence was checked against the tool schema before dispatch.
    let location = args.get_text("location")?;

    // Forecasts are always requested in metric.
    let request = FetchRequest::builder()
        .url(endpoint(&ctx.config.weather_base_url, "forecast"))
        .query(vec![
            ("q".to_string(), location.clone()),
            ("units".to_string(), Units::Metric.to_string()),
            ("appid".to_string(), ctx.config.openweather_api_key.clone()),
        ])
        .build();

    match ctx.fetcher.fetch_json(&request).await {
        Ok(raw) => Ok(normalize_forecast(&raw, &location)),
        Err(e) => absorb(ActionKind::Get5DayForecast, e, forecast_error(&location)),
    }
}
