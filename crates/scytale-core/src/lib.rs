//! # Scytale Core
//!
//! Core library for Scytale - a pluggable text-transformation toolkit with
//! reversible classical ciphers and password-based authenticated encryption.
//!
//! This crate provides the transforms, parameter validation, and the stable
//! textual formats independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **codec**: UTF-8 and Base64 helpers, secure random source
//! - **cipher**: Caesar, Vigenère, and XOR classical transforms
//! - **crypto**: PBKDF2 key derivation and AES-256-GCM envelopes
//! - **dispatch**: cipher registry, parameter validation, routing
//! - **share**: password-free share-token serialization
//!
//! ## Stable formats
//!
//! Two textual formats are interchange contracts and must not change shape:
//! the authenticated envelope `salt:nonce:ciphertext` (all Base64) and the
//! Base64-encoded JSON share token. See [`crypto::aead`] and [`share`].

pub mod cipher;
pub mod codec;
pub mod crypto;
pub mod dispatch;
pub mod error;
pub mod share;

pub use dispatch::{apply, CipherId, CipherParams, Mode, RawParams};
pub use error::{Result, ScytaleError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
