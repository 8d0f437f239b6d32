//! Application-level error types.

use thiserror::Error;

/// Errors raised while reading the optional config inputs.
///
/// None of these are fatal: the loaders in [`crate::content`] turn them into
/// default values or inline notices before they reach the UI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON whose structure is not the keybindings schema.
    #[error("{0}")]
    Shape(String),

    #[error("could not determine the home directory")]
    NoHomeDir,
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
