//! # Error Types
//!
//! This module defines error types used throughout the recibo library.
//!
//! The emulator core never fails: malformed ESC/POS input is a normal input
//! class and decodes to harmless commands. These errors only cover the
//! surrounding I/O and configuration.

use thiserror::Error;

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum ReciboError {
    /// Transport-level errors (bind, accept, connect)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
