//! Outgoing activities.

use async_trait::async_trait;

use crate::error::BotError;

/// Delivers messages to the user on behalf of the current turn.
///
/// Implemented by whatever hosts the conversation (a chat channel, the
/// console front-end, a test double).
#[async_trait]
pub trait ActivitySink: Send + Sync {
    async fn send_activity(&self, text: &str) -> Result<(), BotError>;
}

/// Writes activities to stderr, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleActivitySink;

#[async_trait]
impl ActivitySink for ConsoleActivitySink {
    async fn send_activity(&self, text: &str) -> Result<(), BotError> {
        eprintln!("{text}");
        Ok(())
    }
}
