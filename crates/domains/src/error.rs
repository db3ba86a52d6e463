//! # AppError
//!
//! Centralized error handling for the AnimeHub ecosystem.
//! Every failure a workflow can surface resolves to "nothing changed,
//! tell the user"; no variant is fatal to the process.

use thiserror::Error;

/// The primary error type for all domain operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., a post id that matches no row)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., empty title, comment index out of range)
    #[error("validation error: {0}")]
    Validation(String),

    /// Secret-key mismatch on a privileged action
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The store call itself failed (network, non-2xx response, bad payload)
    #[error("store error: {0}")]
    Transport(String),
}

/// A specialized Result type for AnimeHub logic.
pub type Result<T> = std::result::Result<T, AppError>;
