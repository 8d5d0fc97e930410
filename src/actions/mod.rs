//! Action registry and dispatcher.
//!
//! The set of actions is closed: [`ActionKind`] enumerates every name the
//! planner may call and [`ActionRegistry::invoke`] maps each one to its
//! handler. Handlers absorb anticipated failures (transport, upstream status,
//! incomplete payloads, bad arguments) into an `ErrorResult`; anything else
//! is returned as `Err` for the turn boundary to handle.

pub mod arguments;
pub mod forecast;
pub mod quote;
pub mod weather;

pub use arguments::ActionArguments;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

use crate::config::BotConfig;
use crate::error::{BotError, Result};
use crate::provider::{HttpAdapter, JsonFetcher};
use crate::tools::{validate_arguments, ToolDefinition, ToolParameters};
use crate::types::ActionResult;

/// Every action the planner can invoke.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum ActionKind {
    #[strum(serialize = "getCurrentWeather")]
    #[serde(rename = "getCurrentWeather")]
    GetCurrentWeather,
    #[strum(serialize = "get5DayForecast")]
    #[serde(rename = "get5DayForecast")]
    Get5DayForecast,
    #[strum(serialize = "getQuoteOfTheDay")]
    #[serde(rename = "getQuoteOfTheDay")]
    GetQuoteOfTheDay,
}

impl ActionKind {
    pub fn description(self) -> &'static str {
        match self {
            Self::GetCurrentWeather => "Determine weather in a given location",
            Self::Get5DayForecast => "Get a 5 day forecast for a given location",
            Self::GetQuoteOfTheDay => "Return a random motivational quote and its author",
        }
    }

    pub fn parameters(self) -> ToolParameters {
        match self {
            Self::GetCurrentWeather => ToolParameters::object()
                .string(
                    "location",
                    "Return live weather for location eg. Johannesburg, South Africa : \
                     temperature, condition, wind_speed, sunrise_time, sunset_time",
                    true,
                )
                .string_enum("unit", &["c", "f"], "c")
                .build(),
            Self::Get5DayForecast => ToolParameters::object()
                .string(
                    "location",
                    "Return 5 day forecast for location eg. Johannesburg, South Africa : \
                     temperature, condition, pop(chance of precipitation) wind_speed",
                    true,
                )
                .build(),
            Self::GetQuoteOfTheDay => ToolParameters::empty(),
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::function(self.to_string(), self.description(), self.parameters())
    }
}

/// A tool call emitted by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl ActionRequest {
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// What a handler sees for the duration of one invocation.
pub struct ActionContext<'a> {
    pub config: &'a BotConfig,
    pub fetcher: &'a dyn JsonFetcher,
}

/// Turn an anticipated failure into the action's `ErrorResult`; pass
/// everything else through.
pub(crate) fn absorb(action: ActionKind, err: BotError, message: String) -> Result<ActionResult> {
    if err.is_anticipated() {
        warn!(
            action = %action,
            category = ?err.category(),
            error = %err,
            "action failed; reporting error result to planner"
        );
        Ok(ActionResult::error(message))
    } else {
        Err(err)
    }
}

/// Maps planner tool calls onto handlers.
///
/// Stateless between invocations; cheap to clone and share across turns.
#[derive(Clone)]
pub struct ActionRegistry {
    config: Arc<BotConfig>,
    fetcher: Arc<dyn JsonFetcher>,
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("config", &self.config)
            .field("fetcher", &"..")
            .finish()
    }
}

impl ActionRegistry {
    /// Registry backed by the reqwest adapter.
    pub fn new(config: Arc<BotConfig>) -> Result<Self> {
        let adapter = HttpAdapter::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(adapter)))
    }

    /// Registry backed by any [`JsonFetcher`].
    pub fn with_fetcher(config: Arc<BotConfig>, fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Run one action and return its result value.
    pub async fn invoke(&self, kind: ActionKind, args: &ActionArguments) -> Result<ActionResult> {
        if let Err(violation) = validate_arguments(args.raw(), &kind.parameters().schema) {
            return absorb(
                kind,
                BotError::InvalidArgument(violation.clone()),
                format!("Invalid arguments for {kind}: {violation}"),
            );
        }

        let ctx = ActionContext {
            config: &self.config,
            fetcher: self.fetcher.as_ref(),
        };
        debug!(action = %kind, "invoking action");
        match kind {
            ActionKind::GetCurrentWeather => weather::get_current_weather(&ctx, args).await,
            ActionKind::Get5DayForecast => forecast::get_5day_forecast(&ctx, args).await,
            ActionKind::GetQuoteOfTheDay => quote::get_quote_of_the_day(&ctx, args).await,
        }
    }

    /// Resolve a planner request, run it, and serialize the result.
    ///
    /// Unknown names are `Err(BotError::UnregisteredAction)`.
    pub async fn dispatch(&self, request: &ActionRequest) -> Result<String> {
        let kind: ActionKind = request
            .name
            .parse()
            .map_err(|_| BotError::UnregisteredAction(request.name.clone()))?;
        let args = ActionArguments::new(request.arguments.clone());
        let result = self.invoke(kind, &args).await?;
        Ok(result.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FetchRequest;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    /// Replays one canned outcome and records every request it sees.
    struct CannedFetcher {
        outcome: fn() -> Result<serde_json::Value>,
        seen: Mutex<Vec<FetchRequest>>,
    }

    impl CannedFetcher {
        fn new(outcome: fn() -> Result<serde_json::Value>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<FetchRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl JsonFetcher for CannedFetcher {
        async fn fetch_json(&self, request: &FetchRequest) -> Result<serde_json::Value> {
            self.seen.lock().unwrap().push(request.clone());
            (self.outcome)()
        }
    }

    fn registry(fetcher: Arc<CannedFetcher>) -> ActionRegistry {
        let config = BotConfig::new("ow-key", "ninja-key").with_base_url("http://stub.test");
        ActionRegistry::with_fetcher(Arc::new(config), fetcher)
    }

    fn query_value<'a>(request: &'a FetchRequest, key: &str) -> Option<&'a str> {
        request
            .query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn decode(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn action_names_round_trip_through_strum() {
        assert_eq!(
            "get5DayForecast".parse::<ActionKind>().unwrap(),
            ActionKind::Get5DayForecast
        );
        assert_eq!(ActionKind::GetQuoteOfTheDay.to_string(), "getQuoteOfTheDay");
        assert!("getTides".parse::<ActionKind>().is_err());
    }

    #[tokio::test]
    async fn weather_query_carries_location_units_and_key() {
        let fetcher = CannedFetcher::new(|| Ok(json!({})));
        let registry = registry(fetcher.clone());

        registry
            .dispatch(&ActionRequest::new(
                "getCurrentWeather",
                json!({ "location": "Oslo", "unit": "F" }),
            ))
            .await
            .unwrap();

        let requests = fetcher.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://stub.test/weather");
        assert_eq!(query_value(&requests[0], "q"), Some("Oslo"));
        assert_eq!(query_value(&requests[0], "units"), Some("imperial"));
        assert_eq!(query_value(&requests[0], "appid"), Some("ow-key"));
    }

    #[tokio::test]
    async fn forecast_is_always_metric() {
        let fetcher = CannedFetcher::new(|| Ok(json!({ "list": [] })));
        let registry = registry(fetcher.clone());

        let out = registry
            .dispatch(&ActionRequest::new(
                "get5DayForecast",
                json!({ "location": "Oslo", "unit": "f" }),
            ))
            .await
            .unwrap();

        assert_eq!(decode(&out), json!({ "location": "Oslo", "forecast": [] }));
        let requests = fetcher.requests();
        assert_eq!(requests[0].url, "http://stub.test/forecast");
        assert_eq!(query_value(&requests[0], "units"), Some("metric"));
    }

    #[tokio::test]
    async fn quote_sends_key_header_and_no_query() {
        let fetcher = CannedFetcher::new(|| Ok(json!([{ "quote": "Q", "author": "A", "category": "x" }])));
        let registry = registry(fetcher.clone());

        let out = registry
            .dispatch(&ActionRequest::new("getQuoteOfTheDay", serde_json::Value::Null))
            .await
            .unwrap();

        assert_eq!(decode(&out), json!({ "quote": "Q", "author": "A" }));
        let requests = fetcher.requests();
        assert_eq!(requests[0].url, "http://stub.test/quotes");
        assert!(requests[0].query.is_empty());
        assert_eq!(
            requests[0].headers,
            vec![("X-Api-Key".to_string(), "ninja-key".to_string())]
        );
    }

    #[tokio::test]
    async fn upstream_status_becomes_error_result_naming_location() {
        let fetcher = CannedFetcher::new(|| Err(BotError::upstream_status(404, "http://stub.test/weather")));
        let out = registry(fetcher)
            .dispatch(&ActionRequest::new("getCurrentWeather", json!({ "location": "Atlantis" })))
            .await
            .unwrap();
        assert_eq!(decode(&out), json!({ "error": "Could not fetch weather for Atlantis" }));
    }

    #[tokio::test]
    async fn timeout_becomes_error_result() {
        let fetcher = CannedFetcher::new(|| Err(BotError::Timeout(10_000)));
        let out = registry(fetcher)
            .dispatch(&ActionRequest::new("get5DayForecast", json!({ "location": "Lima" })))
            .await
            .unwrap();
        assert_eq!(decode(&out), json!({ "error": "Could not fetch 5-day forecast for Lima" }));
    }

    #[tokio::test]
    async fn quote_failure_uses_fixed_message() {
        let fetcher = CannedFetcher::new(|| Err(BotError::upstream_status(500, "http://stub.test/quotes")));
        let out = registry(fetcher)
            .dispatch(&ActionRequest::new("getQuoteOfTheDay", json!({})))
            .await
            .unwrap();
        assert_eq!(decode(&out), json!({ "error": "Couldn't fetch a quote right now." }));
    }

    #[tokio::test]
    async fn missing_location_is_error_result_without_upstream_call() {
        let fetcher = CannedFetcher::new(|| Ok(json!({})));
        let out = registry(fetcher.clone())
            .dispatch(&ActionRequest::new("getCurrentWeather", json!({})))
            .await
            .unwrap();

        let value = decode(&out);
        let message = value["error"].as_str().unwrap();
        assert!(message.contains("getCurrentWeather"));
        assert!(message.contains("location"));
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn blank_forecast_location_reports_schema_violation() {
        let fetcher = CannedFetcher::new(|| Ok(json!({ "list": [] })));
        let out = registry(fetcher.clone())
            .dispatch(&ActionRequest::new("get5DayForecast", json!({ "location": "  " })))
            .await
            .unwrap();

        let value = decode(&out);
        let message = value["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid arguments for get5DayForecast: "));
        assert!(!message.contains("unspecified"));
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn unknown_action_escapes_as_dispatch_fault() {
        let fetcher = CannedFetcher::new(|| Ok(json!({})));
        let err = registry(fetcher)
            .dispatch(&ActionRequest::new("getTides", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::UnregisteredAction(ref name) if name == "getTides"));
    }

    #[tokio::test]
    async fn unanticipated_fetch_fault_escapes() {
        let fetcher = CannedFetcher::new(|| Err(BotError::Panic("adapter bug".into())));
        let result = registry(fetcher)
            .dispatch(&ActionRequest::new("getQuoteOfTheDay", json!({})))
            .await;
        assert!(matches!(result, Err(BotError::Panic(_))));
    }
}
