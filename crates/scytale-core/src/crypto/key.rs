//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! This module derives encryption keys from passwords. PBKDF2 with a high
//! iteration count makes offline password guessing computationally
//! expensive; the iteration count is part of the stable wire contract and
//! must not change without versioning the envelope format.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

/// PBKDF2 iteration count (the tunable cost factor).
///
/// Fixed at 200 000 for interoperability: every envelope ever produced
/// must decrypt with this exact count.
pub const PBKDF2_ITERATIONS: u32 = 200_000;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256-GCM).
const KEY_LENGTH: usize = 32;

/// A cryptographic key derived from a password.
///
/// Ephemeral by design: held only for the duration of one encrypt/decrypt
/// call, never serialized or logged, and zeroized from memory on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate
    /// encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password using PBKDF2-HMAC-SHA256.
///
/// # Arguments
///
/// * `password` - The password to derive from
/// * `salt` - Random salt (16 bytes in this system's envelopes)
/// * `iterations` - Cost factor; use [`PBKDF2_ITERATIONS`] for
///   envelope-compatible keys
///
/// # Security
///
/// - Same (password, salt, iterations) always produces the same key
/// - Changing any input changes the key with overwhelming probability
/// - CPU-bound and long-running by design; call it off any
///   latency-sensitive path
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> DerivedKey {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    DerivedKey { key }
}
