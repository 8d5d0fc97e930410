//! Turn boundary between the conversation runtime and the action layer.

pub mod activity;
pub mod bot;
pub mod error_handler;
pub mod feedback;

pub use activity::{ActivitySink, ConsoleActivitySink};
pub use bot::Bot;
pub use error_handler::{TurnErrorHandler, APOLOGY};
pub use feedback::{FeedbackEvent, FeedbackReaction, FeedbackSink, FeedbackValue, LogFeedbackSink};
