//! `getQuoteOfTheDay`.

use super::{absorb, ActionArguments, ActionContext, ActionKind};
use crate::error::Result;
use crate::normalize::quote::{normalize_quote, QUOTE_ERROR};
use crate::provider::http::{api_key_header, endpoint};
use crate::provider::FetchRequest;
use crate::types::ActionResult;

pub async fn get_quote_of_the_day(ctx: &ActionContext<'_>, _args: &ActionArguments) -> Result<ActionResult> {
    let request = FetchRequest::builder()
        .url(endpoint(&ctx.config.quote_base_url, "quotes"))
        .headers(vec![api_key_header(&ctx.config.api_ninjas_api_key)])
        .build();

    match ctx.fetcher.fetch_json(&request).await {
        Ok(raw) => Ok(normalize_quote(&raw).into()),
        Err(e) => absorb(ActionKind::GetQuoteOfTheDay, e, QUOTE_ERROR.to_string()),
    }
}
