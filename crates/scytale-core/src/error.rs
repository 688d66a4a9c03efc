//! Error types for Scytale core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer will map these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Scytale operations.
pub type Result<T> = std::result::Result<T, ScytaleError>;

/// Core error type for Scytale operations.
///
/// Every variant is recoverable by the caller: a bad parameter can be
/// corrected, a malformed envelope can be re-pasted, a wrong password can
/// be retried. None of the variants carry plaintext, passwords, or key
/// material.
#[derive(Debug, Error)]
pub enum ScytaleError {
    /// Missing or invalid cipher parameter (rejected before any transform runs)
    #[error("Invalid parameter: {0}")]
    Parameter(String),

    /// Malformed textual envelope or share token
    #[error("Malformed input: {0}")]
    Format(String),

    /// Authenticated decryption failed.
    ///
    /// Deliberately non-specific: a wrong password and corrupted data are
    /// indistinguishable so the error cannot be used as an oracle.
    #[error("Decryption failed: wrong password or corrupted data")]
    Authentication,

    /// Byte/text codec failure
    #[error("Encoding error: {0}")]
    Encoding(String),
}
