//! Error types for startup and the Discord session.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors.
//! Configuration and command-set errors are fatal at startup; Discord errors
//! raised while handling a single interaction are logged by the handler and
//! never end the session.

pub mod command;
pub mod config;

use std::time::Duration;

use thiserror::Error;

use crate::server::error::{command::CommandError, config::ConfigError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion. `serenity::Error`
/// is boxed and converted through a manual `From` implementation.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Registered commands and reply table disagree.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Socket error, typically the liveness port already being bound.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// An interaction reply did not complete in time.
    #[error("Interaction reply timed out after {0:?}")]
    ReplyTimeout(Duration),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
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
