//! Last-resort handling for faults that escape an action.

use std::error::Error as _;

use tracing::error;

use super::activity::ActivitySink;
use crate::error::BotError;

/// The only text a user ever sees for an unhandled fault.
pub const APOLOGY: &str = "The bot encountered an error or bug.";

/// Logs an unhandled fault and apologizes to the user.
///
/// Never returns an error: a failure to deliver the apology is logged too.
#[derive(Debug, Clone, Default)]
pub struct TurnErrorHandler;

impl TurnErrorHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn on_turn_error(&self, sink: &dyn ActivitySink, err: &BotError) {
        error!(
            category = ?err.category(),
            error = %err,
            chain = %source_chain(err),
            "[on_turn_error] unhandled error"
        );

        if let Err(send_err) = sink.send_activity(APOLOGY).await {
            error!(error = %send_err, "failed to deliver turn error apology");
        }
    }
}

/// `outer: inner: innermost`, for log lines.
fn source_chain(err: &BotError) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}
