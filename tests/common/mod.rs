//! Shared test helpers: stub-provider config and an activity recorder.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use meteobot::actions::ActionRegistry;
use meteobot::config::BotConfig;
use meteobot::error::BotError;
use meteobot::runtime::{ActivitySink, Bot};
use wiremock::MockServer;

pub const WEATHER_KEY: &str = "test-openweather-key";
pub const QUOTE_KEY: &str = "test-ninjas-key";

/// Config pointing both providers at the stub server.
pub fn stub_config(server: &MockServer) -> BotConfig {
    BotConfig::new(WEATHER_KEY, QUOTE_KEY)
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5))
}

pub fn stub_registry(config: BotConfig) -> ActionRegistry {
    ActionRegistry::new(Arc::new(config)).expect("registry")
}

pub fn stub_bot(server: &MockServer) -> Bot {
    Bot::with_registry(stub_registry(stub_config(server)))
}

/// Collects everything the bot sends to the user.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivitySink for RecordingSink {
    async fn send_activity(&self, text: &str) -> Result<(), BotError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub fn decode(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("action result is JSON")
}

pub fn is_clock(s: &str) -> bool {
    let bytes = s.as_bytes();
    s.len() == 5
        && bytes[2] == b':'
        && s[..2].parse::<u8>().map(|h| h < 24).unwrap_or(false)
        && s[3..].parse::<u8>().map(|m| m < 60).unwrap_or(false)
}
