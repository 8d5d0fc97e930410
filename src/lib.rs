//! meteobot: action layer for a conversational weather bot.
//!
//! An external assistant decides which action to call; this crate runs the
//! call against the weather and quote providers and hands back a JSON result
//! in a fixed schema for the assistant to narrate.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use meteobot::actions::ActionRequest;
//! use meteobot::config::BotConfig;
//! use meteobot::runtime::{Bot, ConsoleActivitySink};
//!
//! # async fn example() -> meteobot::error::Result<()> {
//! let bot = Bot::new(Arc::new(BotConfig::from_env()?))?;
//! let request = ActionRequest::new("getCurrentWeather", serde_json::json!({ "location": "Oslo" }));
//! if let Some(json) = bot.invoke_action(&ConsoleActivitySink, &request).await {
//!     println!("{json}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod normalize;
pub mod prelude;
pub mod provider;
pub mod runtime;
pub mod tools;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
