//! Tests for the assistant tool definitions.

use meteobot::actions::ActionKind;
use meteobot::tools::{definitions, validate_arguments};
use strum::IntoEnumIterator;

#[test]
fn one_definition_per_action_in_registry_order() {
    let names: Vec<String> = definitions()
        .into_iter()
        .map(|d| d.function.name)
        .collect();
    assert_eq!(names, ["getCurrentWeather", "get5DayForecast", "getQuoteOfTheDay"]);
}

#[test]
fn current_weather_schema_requires_location_and_offers_unit() {
    let definition = ActionKind::GetCurrentWeather.definition();
    let value = serde_json::to_value(&definition).unwrap();

    assert_eq!(value["type"], "function");
    assert_eq!(value["function"]["name"], "getCurrentWeather");
    let params = &value["function"]["parameters"];
    assert_eq!(params["type"], "object");
    assert_eq!(params["required"], serde_json::json!(["location"]));
    assert_eq!(params["properties"]["unit"]["enum"], serde_json::json!(["c", "f"]));
    assert_eq!(params["properties"]["unit"]["default"], "c");
}

#[test]
fn quote_takes_no_arguments() {
    let value = serde_json::to_value(ActionKind::GetQuoteOfTheDay.definition()).unwrap();
    let params = &value["function"]["parameters"];
    assert_eq!(params["properties"], serde_json::json!({}));
    assert_eq!(params["required"], serde_json::json!([]));
}

#[test]
fn every_schema_accepts_its_minimal_arguments() {
    for kind in ActionKind::iter() {
        let args = match kind {
            ActionKind::GetQuoteOfTheDay => serde_json::json!({}),
            _ => serde_json::json!({ "location": "Johannesburg, South Africa" }),
        };
        assert!(
            validate_arguments(&args, &kind.parameters().schema).is_ok(),
            "{kind} rejected {args}"
        );
    }
}
