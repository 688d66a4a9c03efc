//! Password-based authenticated encryption.
//!
//! This module provides the one real cryptographic scheme in Scytale:
//! - **PBKDF2-HMAC-SHA256** key derivation (deliberately expensive)
//! - **AES-256-GCM** authenticated encryption (confidentiality + integrity)
//!
//! ## Security Model
//!
//! - A fresh 16-byte salt and 12-byte nonce are drawn from the OS CSPRNG on
//!   every encryption; neither is ever reused or persisted.
//! - Derived keys live only for the duration of one call and are zeroized
//!   on drop.
//! - Decryption failure is reported without distinguishing a wrong password
//!   from corrupted data.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the ciphertext envelope
//! - Offline brute-force attacks on the password (iteration cost)
//! - Tampering with any envelope field (GCM tag)
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Weak passwords chosen by the user

pub mod aead;
pub mod key;

pub use aead::{decrypt, encrypt};
pub use key::{derive_key, DerivedKey, PBKDF2_ITERATIONS};
