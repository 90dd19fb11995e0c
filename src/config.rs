use std::env;
use std::time::Duration;

use chrono_tz::Tz;
use tracing::info;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.cricapi.com/v1";
pub const DEFAULT_API_KEY: &str = "demo-key";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_POLL_SECS: u64 = 30;

/// Startup settings, read once from the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub environment: String,
    /// Serve the embedded fixtures instead of calling the API.
    pub use_mock_data: bool,
    pub poll_interval: Duration,
    pub display_tz: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            use_mock_data: !cfg!(feature = "live-api"),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            display_tz: Tz::UTC,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            environment = %config.environment,
            base_url = %config.base_url,
            use_mock_data = config.use_mock_data,
            poll_secs = config.poll_interval.as_secs(),
            display_tz = %config.display_tz,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(v) = get("CRICKET_API_BASE_URL") {
            config.base_url = v;
        }
        if let Some(v) = get("CRICKET_API_KEY") {
            config.api_key = v;
        }
        if let Some(v) = get("APP_ENV") {
            config.environment = v;
        }
        if let Some(v) = get("USE_MOCK_DATA") {
            config.use_mock_data = parse_flag("USE_MOCK_DATA", &v)?;
        }
        if let Some(v) = get("POLL_INTERVAL_SECS") {
            let secs = v.parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| Error::Config {
                var: "POLL_INTERVAL_SECS",
                reason: format!("expected a positive number of seconds, got {v:?}"),
            })?;
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(v) = get("DISPLAY_TZ") {
            config.display_tz = v.parse::<Tz>().map_err(|e| Error::Config {
                var: "DISPLAY_TZ",
                reason: e.to_string(),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config { var, reason: format!("expected true or false, got {value:?}") }),
    }
}
