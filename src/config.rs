//! Process configuration for the `postrelay` binary.
//!
//! Values come from the environment, optionally seeded from a `.env` file.
//!
//! | Variable | Required | Default |
//! | --- | --- | --- |
//! | `DATABASE_URL` | yes | |
//! | `POSTRELAY_DEST_CHANNEL_ID` | yes | |
//! | `POSTRELAY_DEST_CHANNEL_HANDLE` | no | none |
//! | `POSTRELAY_SOURCE` | no | `telegram` |
//! | `POSTRELAY_POOL_SIZE` | no | `8` |

use crate::relay::domain::Destination;
use std::str::FromStr;
use thiserror::Error;

const DATABASE_URL: &str = "DATABASE_URL";
const DEST_CHANNEL_ID: &str = "POSTRELAY_DEST_CHANNEL_ID";
const DEST_CHANNEL_HANDLE: &str = "POSTRELAY_DEST_CHANNEL_HANDLE";
const SOURCE: &str = "POSTRELAY_SOURCE";
const POOL_SIZE: &str = "POSTRELAY_POOL_SIZE";

const DEFAULT_SOURCE: &str = "telegram";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A variable could not be parsed.
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value as found.
        value: String,
        /// Parser message.
        reason: String,
    },
}

/// Relay process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    database_url: String,
    destination: Destination,
    source: String,
    pool_size: u32,
}

impl RelayConfig {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first when present;
    /// variables already set take precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            tracing::warn!(error = %err, "ignoring unreadable .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required key is missing or a value
    /// cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = read(DATABASE_URL).ok_or(ConfigError::Missing(DATABASE_URL))?;
        let chat_id = read(DEST_CHANNEL_ID)
            .ok_or(ConfigError::Missing(DEST_CHANNEL_ID))
            .and_then(|raw| parse(DEST_CHANNEL_ID, &raw))?;
        let destination = match read(DEST_CHANNEL_HANDLE) {
            Some(handle) => Destination::new(chat_id).with_handle(handle),
            None => Destination::new(chat_id),
        };
        let source = read(SOURCE).map_or_else(
            || DEFAULT_SOURCE.to_owned(),
            |value| value.trim().to_owned(),
        );
        let pool_size = match read(POOL_SIZE) {
            Some(raw) => parse(POOL_SIZE, &raw)?,
            None => DEFAULT_POOL_SIZE,
        };
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: POOL_SIZE,
                value: pool_size.to_string(),
                reason: "pool size must be at least 1".to_owned(),
            });
        }

        Ok(Self {
            database_url,
            destination,
            source,
            pool_size,
        })
    }

    /// Returns the `PostgreSQL` connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the destination channel.
    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Returns the origin source recorded on relayed posts.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the maximum number of pooled database connections.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_owned(),
        reason: err.to_string(),
    })
}
