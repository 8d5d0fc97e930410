//! Configuration, loaded once at process start.
//!
//! Resolution order: `env/.env.local.user` wins over the process
//! environment, which wins over `.env`.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use strum::{Display, EnumString};

use crate::error::{BotError, Result};

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_QUOTE_BASE_URL: &str = "https://api.api-ninjas.com/v1";
pub const DEFAULT_PORT: u16 = 3978;
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Local dotenv overlay written by the hosting toolchain.
const LOCAL_USER_ENV: &str = "env/.env.local.user";

/// Which clock zone sunrise/sunset times are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SunTimesZone {
    /// The evaluating machine's local zone.
    #[default]
    Server,
    /// The queried city's zone, from the provider's UTC offset.
    Location,
}

/// Identity the hosting channel uses for this bot.
#[derive(Clone, Default)]
pub struct BotIdentity {
    pub app_id: String,
    pub app_password: String,
    pub app_type: String,
    pub tenant_id: String,
}

/// Identity of the externally hosted assistant that plans tool calls.
#[derive(Clone, Default)]
pub struct AssistantIdentity {
    pub api_key: Option<String>,
    pub assistant_id: Option<String>,
}

/// Explicit bot configuration, passed by reference to the HTTP adapter and
/// action registry.
#[derive(Clone)]
pub struct BotConfig {
    pub openweather_api_key: String,
    pub api_ninjas_api_key: String,
    pub weather_base_url: String,
    pub quote_base_url: String,
    pub http_timeout: Duration,
    pub sun_times_zone: SunTimesZone,
    pub port: u16,
    pub bot: BotIdentity,
    pub assistant: AssistantIdentity,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("openweather_api_key", &"<redacted>")
            .field("api_ninjas_api_key", &"<redacted>")
            .field("weather_base_url", &self.weather_base_url)
            .field("quote_base_url", &self.quote_base_url)
            .field("http_timeout", &self.http_timeout)
            .field("sun_times_zone", &self.sun_times_zone)
            .field("port", &self.port)
            .field("bot_app_id", &self.bot.app_id)
            .field(
                "assistant_id",
                &self.assistant.assistant_id.as_deref().unwrap_or(""),
            )
            .finish()
    }
}

impl BotConfig {
    /// Build a config with the two provider keys and defaults for the rest.
    pub fn new(openweather_api_key: impl Into<String>, api_ninjas_api_key: impl Into<String>) -> Self {
        Self {
            openweather_api_key: openweather_api_key.into(),
            api_ninjas_api_key: api_ninjas_api_key.into(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            quote_base_url: DEFAULT_QUOTE_BASE_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            sun_times_zone: SunTimesZone::default(),
            port: DEFAULT_PORT,
            bot: BotIdentity::default(),
            assistant: AssistantIdentity::default(),
        }
    }

    /// Point both providers at one base URL (stub servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.weather_base_url = base_url.clone();
        self.quote_base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_sun_times_zone(mut self, zone: SunTimesZone) -> Self {
        self.sun_times_zone = zone;
        self
    }

    /// Load dotenv files, then read the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::load_env_file(LOCAL_USER_ENV);
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Layer an extra dotenv file over the environment if it exists.
    /// Values in the file override variables that are already set.
    pub fn load_env_file(path: impl AsRef<Path>) {
        let path = path.as_ref();
        if path.exists() {
            if let Err(e) = dotenvy::from_path_override(path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to load env file");
            }
        }
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| get(key).ok_or_else(|| BotError::missing(key));

        let mut config = Self::new(
            required("OPENWEATHER_API_KEY")?,
            required("API_NINJAS_API_KEY")?,
        );

        if let Some(url) = get("OPENWEATHER_BASE_URL") {
            config.weather_base_url = url;
        }
        if let Some(url) = get("API_NINJAS_BASE_URL") {
            config.quote_base_url = url;
        }
        if let Some(raw) = get("HTTP_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                BotError::Configuration(format!("HTTP_TIMEOUT_SECS must be whole seconds, got '{raw}'"))
            })?;
            if secs == 0 {
                return Err(BotError::Configuration(
                    "HTTP_TIMEOUT_SECS must be greater than zero".into(),
                ));
            }
            config.http_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = get("SUN_TIMES_ZONE") {
            config.sun_times_zone = raw.trim().parse().map_err(|_| {
                BotError::Configuration(format!(
                    "SUN_TIMES_ZONE must be 'server' or 'location', got '{raw}'"
                ))
            })?;
        }
        if let Some(raw) = get("PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| BotError::Configuration(format!("PORT is not a valid port: '{raw}'")))?;
        }

        config.bot = BotIdentity {
            app_id: get("BOT_ID").unwrap_or_default(),
            app_password: get("BOT_PASSWORD").unwrap_or_default(),
            app_type: get("BOT_TYPE").unwrap_or_default(),
            tenant_id: get("BOT_TENANT_ID").unwrap_or_default(),
        };
        config.assistant = AssistantIdentity {
            api_key: get("OPENAI_API_KEY"),
            assistant_id: get("OPENAI_ASSISTANT_ID"),
        };

        Ok(config)
    }
}
