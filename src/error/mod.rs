//! Error types for the bot and the Comlink client core.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors; most
//! variants use `#[from]` for automatic conversion so startup code can lean on
//! `?` end to end.

pub mod comlink;
pub mod config;

use thiserror::Error;

pub use comlink::ComlinkError;
pub use config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the error types that can occur during startup and bot operation.
/// Comlink call failures are surfaced to their immediate caller and only reach
/// this type when startup itself performs a remote call.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Comlink or stats service call failure.
    #[error(transparent)]
    ComlinkErr(#[from] ComlinkError),

    /// Discord gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Filesystem error writing the localization asset or other local state.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
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
