//! The bot: action dispatch wrapped in a turn boundary that never fails.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use super::activity::ActivitySink;
use super::error_handler::TurnErrorHandler;
use super::feedback::{FeedbackEvent, FeedbackSink, LogFeedbackSink};
use crate::actions::{ActionRegistry, ActionRequest};
use crate::config::BotConfig;
use crate::error::{BotError, Result};

/// Entry point the conversation runtime calls into.
///
/// Cloning is cheap; concurrent turns share nothing mutable.
#[derive(Clone)]
pub struct Bot {
    registry: ActionRegistry,
    error_handler: TurnErrorHandler,
    feedback: Arc<dyn FeedbackSink>,
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Bot {
    /// Bot with the HTTP-backed registry and log feedback sink.
    pub fn new(config: Arc<BotConfig>) -> Result<Self> {
        Ok(Self::with_registry(ActionRegistry::new(config)?))
    }

    pub fn with_registry(registry: ActionRegistry) -> Self {
        Self {
            registry,
            error_handler: TurnErrorHandler::new(),
            feedback: Arc::new(LogFeedbackSink),
        }
    }

    pub fn with_feedback_sink(mut self, sink: Arc<dyn FeedbackSink>) -> Self {
        self.feedback = sink;
        self
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Dispatch one planner tool call for the current turn.
    ///
    /// Returns the JSON result for the planner, or `None` after an unhandled
    /// fault (error or panic) has been logged and the user sent an apology.
    /// Dropping the returned future abandons any in-flight upstream GET.
    pub async fn invoke_action(&self, sink: &dyn ActivitySink, request: &ActionRequest) -> Option<String> {
        let span = info_span!("turn", turn_id = %Uuid::new_v4(), action = %request.name);
        async move {
            let outcome = AssertUnwindSafe(self.registry.dispatch(request))
                .catch_unwind()
                .await;
            let err = match outcome {
                Ok(Ok(json)) => return Some(json),
                Ok(Err(e)) => e,
                Err(payload) => BotError::Panic(panic_message(payload.as_ref())),
            };
            self.error_handler.on_turn_error(sink, &err).await;
            None
        }
        .instrument(span)
        .await
    }

    /// Hand a feedback event to the sink; sink failures are logged only.
    pub fn on_feedback(&self, event: &FeedbackEvent) {
        if let Err(e) = self.feedback.record(event) {
            warn!(error = %e, "failed to record feedback");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
