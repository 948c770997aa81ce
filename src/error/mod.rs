//! Error types for the bot.
//!
//! `AppError` is the top-level error that wraps domain-specific errors and is propagated
//! with `?` throughout startup and the Discord platform layer. `PipelineError` tags an
//! `AppError` with the member and pipeline stage it occurred in, and is only ever logged
//! at the event-handler boundary.

pub mod config;
pub mod internal;
pub mod pipeline;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal failure, indicating a possible bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP client error from reqwest.
    ///
    /// Only raised while building the client; request failures against the validation
    /// API are reported as a `ValidationResult::Failure` instead.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Global tracing subscriber could not be installed.
    #[error(transparent)]
    LoggingErr(#[from] tracing_subscriber::util::TryInitError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
