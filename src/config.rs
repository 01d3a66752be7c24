//! Runtime configuration
//!
//! All settings come from the process environment (optionally seeded from a
//! `.env` file before startup). Everything is read once into an explicit
//! [`Config`] value; nothing reads the environment after startup.

use std::env;
use std::time::Duration;

use teloxide::types::{ChatId, Recipient};
use thiserror::Error;
use url::Url;

/// Homework status endpoint used when `PRACTICUM_ENDPOINT` is not set
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Interval between poll cycles (in seconds) when `RETRY_PERIOD_SECS` is not set
pub const RETRY_PERIOD_SECS: u64 = 600; // 10 minutes

/// Longest accepted `RETRY_PERIOD_SECS` override
const MAX_RETRY_PERIOD_SECS: u64 = 86_400; // 1 day

/// Environment variables without which the bot cannot run
const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required variables are unset or empty. Lists every
    /// offending name so a broken deployment is fixed in one pass.
    #[error(
        "Отсутствуют обязательные переменные окружения: {}. Программа принудительно остановлена.",
        .0.join(", ")
    )]
    MissingVars(Vec<&'static str>),

    #[error("Недопустимое значение TELEGRAM_CHAT_ID: {0:?} (ожидается числовой идентификатор чата или @username канала)")]
    InvalidChatId(String),

    #[error("Недопустимое значение PRACTICUM_ENDPOINT: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Validated startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    /// Read from PRACTICUM_TOKEN environment variable
    pub practicum_token: String,

    /// Telegram Bot API token
    /// Read from TELEGRAM_TOKEN environment variable
    pub telegram_token: String,

    /// Chat that receives every notification
    /// Read from TELEGRAM_CHAT_ID environment variable
    pub chat: Recipient,

    /// Homework status endpoint
    /// Read from PRACTICUM_ENDPOINT environment variable
    /// Default: [`ENDPOINT`]
    pub endpoint: Url,

    /// Interval between poll cycles
    /// Read from RETRY_PERIOD_SECS environment variable
    /// Default: [`RETRY_PERIOD_SECS`] (10 minutes)
    pub retry_period: Duration,
}

impl Config {
    /// Reads and validates the whole configuration in one pass.
    ///
    /// Collects *all* missing required variables before failing, so the
    /// error message names every variable that still has to be set.
    /// An empty value counts as missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|name| env::var(name).ok().filter(|value| !value.is_empty()).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let practicum_token = env::var("PRACTICUM_TOKEN").unwrap_or_default();
        let telegram_token = env::var("TELEGRAM_TOKEN").unwrap_or_default();
        let chat = parse_chat(&env::var("TELEGRAM_CHAT_ID").unwrap_or_default())?;

        let endpoint = match env::var("PRACTICUM_ENDPOINT").ok().filter(|value| !value.is_empty()) {
            Some(raw) => Url::parse(&raw)?,
            None => Url::parse(ENDPOINT)?,
        };

        // The poll timer panics on a zero period; zero and oversized
        // overrides fall back to the default.
        let retry_period = env::var("RETRY_PERIOD_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| (1..=MAX_RETRY_PERIOD_SECS).contains(secs))
            .unwrap_or(RETRY_PERIOD_SECS);

        Ok(Config {
            practicum_token,
            telegram_token,
            chat,
            endpoint,
            retry_period: Duration::from_secs(retry_period),
        })
    }
}

/// Parses TELEGRAM_CHAT_ID into a Telegram recipient.
///
/// Accepts a numeric chat/user/group id (possibly negative) or a channel
/// username in the `@name` form. Anything else is a startup error rather
/// than a value passed through for Telegram to reject on every cycle.
fn parse_chat(raw: &str) -> Result<Recipient, ConfigError> {
    if let Some(username) = raw.strip_prefix('@') {
        if !username.is_empty() {
            return Ok(Recipient::ChannelUsername(raw.to_string()));
        }
    } else if let Ok(id) = raw.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }
    Err(ConfigError::InvalidChatId(raw.to_string()))
}
