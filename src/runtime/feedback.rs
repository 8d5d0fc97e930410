//! User feedback on assistant replies.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::info;

use crate::error::BotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackReaction {
    Like,
    Dislike,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackValue {
    pub reaction: FeedbackReaction,
    /// Free text; channels send either a plain string or a JSON object.
    #[serde(default)]
    pub feedback: serde_json::Value,
}

/// A thumbs up/down attached to an earlier reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    #[serde(default = "default_action_name")]
    pub action_name: String,
    pub action_value: FeedbackValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
}

fn default_action_name() -> String {
    "feedback".to_string()
}

impl FeedbackEvent {
    pub fn new(reaction: FeedbackReaction, feedback: impl Into<String>) -> Self {
        Self {
            action_name: default_action_name(),
            action_value: FeedbackValue {
                reaction,
                feedback: serde_json::Value::String(feedback.into()),
            },
            reply_to_id: None,
        }
    }

    pub fn replying_to(mut self, reply_to_id: impl Into<String>) -> Self {
        self.reply_to_id = Some(reply_to_id.into());
        self
    }
}

/// Accepts and records feedback events.
pub trait FeedbackSink: Send + Sync {
    fn record(&self, event: &FeedbackEvent) -> Result<(), BotError>;
}

/// Records feedback to the log as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedbackSink;

impl FeedbackSink for LogFeedbackSink {
    fn record(&self, event: &FeedbackEvent) -> Result<(), BotError> {
        let rendered = serde_json::to_string_pretty(event)?;
        info!(
            reaction = %event.action_value.reaction,
            reply_to_id = event.reply_to_id.as_deref().unwrap_or(""),
            "Your feedback is:\n{rendered}"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_channel_payload() {
        let event: FeedbackEvent = serde_json::from_value(json!({
            "action_name": "feedback",
            "action_value": { "reaction": "dislike", "feedback": "{\"feedbackText\":\"wrong city\"}" },
            "reply_to_id": "msg-42"
        }))
        .unwrap();

        assert_eq!(event.action_value.reaction, FeedbackReaction::Dislike);
        assert_eq!(event.reply_to_id.as_deref(), Some("msg-42"));
    }

    #[test]
    fn action_name_and_text_are_optional() {
        let event: FeedbackEvent =
            serde_json::from_value(json!({ "action_value": { "reaction": "like" } })).unwrap();
        assert_eq!(event.action_name, "feedback");
        assert!(event.action_value.feedback.is_null());
    }

    #[test]
    fn log_sink_accepts_events() {
        let event = FeedbackEvent::new(FeedbackReaction::Like, "punny!").replying_to("msg-1");
        assert!(LogFeedbackSink.record(&event).is_ok());
    }
}
