//! Error types for meteobot.

use thiserror::Error;

/// Primary error type for all bot operations.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing required configuration: {key}")]
    MissingConfiguration { key: String },

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Normalization error: {0}")]
    Normalization(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unregistered action: {0}")]
    UnregisteredAction(String),

    #[error("Handler panicked: {0}")]
    Panic(String),
}

/// Broad error category, following the bot's failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    UpstreamTransport,
    UpstreamStatus,
    Normalization,
    InvalidArgument,
    Dispatch,
    Internal,
}

impl BotError {
    /// Create an upstream status error.
    pub fn upstream_status(status: u16, url: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a missing-configuration error for an environment key.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) | Self::MissingConfiguration { .. } => {
                ErrorCategory::Configuration
            }
            Self::Network(_) | Self::Timeout(_) => ErrorCategory::UpstreamTransport,
            Self::UpstreamStatus { .. } => ErrorCategory::UpstreamStatus,
            Self::Normalization(_) => ErrorCategory::Normalization,
            Self::InvalidArgument(_) => ErrorCategory::InvalidArgument,
            Self::UnregisteredAction(_) => ErrorCategory::Dispatch,
            Self::Serialization(_) | Self::Panic(_) => ErrorCategory::Internal,
        }
    }

    /// Whether a handler is expected to absorb this error into an `ErrorResult`.
    ///
    /// Everything else escapes to the turn boundary.
    pub fn is_anticipated(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::UpstreamTransport
                | ErrorCategory::UpstreamStatus
                | ErrorCategory::Normalization
                | ErrorCategory::InvalidArgument
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BotError>;
