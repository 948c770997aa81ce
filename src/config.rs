use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const PRODUCTION_API_URL: &str = "https://osf-database-api.shuttleapp.rs";
const DEVELOPMENT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_VALIDATION_TIMEOUT_SECS: u64 = 10;

/// Embed color for successful validations.
pub const SUCCESS_COLOR: u32 = 0x2ecc71;
/// Embed color for failed validations.
pub const FAILURE_COLOR: u32 = 0xe74c3c;

/// Deployment environment, selecting the default validation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotEnvironment {
    Production,
    Development,
}

impl BotEnvironment {
    fn default_api_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Development => DEVELOPMENT_API_URL,
        }
    }
}

pub struct Config {
    pub discord_bot_token: String,

    pub log_channel_id: u64,
    pub osf_member_role_id: u64,

    pub environment: BotEnvironment,
    pub validation_api_url: String,
    pub validation_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable has an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let environment = match lookup("BOT_ENV") {
            None => BotEnvironment::Production,
            Some(value) => parse_environment(&value)?,
        };

        let validation_api_url = lookup("VALIDATION_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| environment.default_api_url().to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let validation_timeout = match lookup("VALIDATION_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_VALIDATION_TIMEOUT_SECS),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(invalid(
                        "VALIDATION_TIMEOUT_SECS",
                        &value,
                        "expected a positive number of seconds",
                    ))
                }
            },
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            log_channel_id: parse_snowflake("LOG_CHANNEL_ID", &required("LOG_CHANNEL_ID")?)?,
            osf_member_role_id: parse_snowflake(
                "OSF_MEMBER_ROLE_ID",
                &required("OSF_MEMBER_ROLE_ID")?,
            )?,
            environment,
            validation_api_url,
            validation_timeout,
        })
    }
}

fn parse_environment(value: &str) -> Result<BotEnvironment, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "production" | "prod" => Ok(BotEnvironment::Production),
        "development" | "dev" => Ok(BotEnvironment::Development),
        _ => Err(invalid(
            "BOT_ENV",
            value,
            "expected 'production' or 'development'",
        )),
    }
}

/// Discord IDs are non-zero 64-bit snowflakes.
fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(invalid(name, value, "expected a non-zero Discord ID")),
    }
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
