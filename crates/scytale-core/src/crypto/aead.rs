//! AES-256-GCM encryption with a stable textual envelope.
//!
//! ## Wire format
//!
//! ```text
//! <base64-salt>:<base64-nonce>:<base64-ciphertext-with-tag>
//! ```
//!
//! Exactly two `:` delimiters, three non-empty fields. The salt decodes to
//! exactly 16 bytes and the nonce to exactly 12. This is the one
//! interchange contract that must remain bit-for-bit stable across
//! implementations.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::codec;
use crate::crypto::key::{derive_key, PBKDF2_ITERATIONS};
use crate::error::{Result, ScytaleError};

/// Salt length in bytes (fixed by the wire format).
const SALT_LEN: usize = 16;

/// Nonce length in bytes (AES-GCM standard, fixed by the wire format).
const NONCE_LEN: usize = 12;

/// Encrypt plaintext under a password, returning the textual envelope.
///
/// Draws a fresh salt and nonce from the OS CSPRNG on every call; two
/// encryptions of the same plaintext under the same password produce
/// unrelated envelopes. Nothing is cached or persisted.
///
/// # Examples
///
/// ```
/// use scytale_core::crypto::{decrypt, encrypt};
///
/// let envelope = encrypt("meet at dawn", "hunter2-but-stronger");
/// assert_eq!(envelope.split(':').count(), 3);
/// assert_eq!(decrypt(&envelope, "hunter2-but-stronger").unwrap(), "meet at dawn");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> String {
    let salt = codec::secure_random_bytes(SALT_LEN);
    let nonce_bytes = codec::secure_random_bytes(NONCE_LEN);

    let derived = derive_key(password, &salt, PBKDF2_ITERATIONS);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(derived.as_bytes()));
    let nonce = Nonce::from_slice(&nonce_bytes);

    // Aes256Gcm::encrypt only fails on inputs beyond GCM's 64 GiB limit,
    // unreachable for in-memory text.
    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .unwrap_or_else(|_| unreachable!("AES-GCM encryption of in-memory text cannot fail"));

    format!(
        "{}:{}:{}",
        codec::encode_token(&salt),
        codec::encode_token(&nonce_bytes),
        codec::encode_token(&ciphertext)
    )
}

/// Decrypt a textual envelope produced by [`encrypt`].
///
/// Every call is independent and side-effect-free; retrying with a
/// different password is always safe.
///
/// # Errors
///
/// - `ScytaleError::Format` if the field count is not exactly 3, a field is
///   not valid Base64, or the decoded salt/nonce have the wrong length
/// - `ScytaleError::Authentication` if the tag check fails (wrong password
///   or corrupted data; deliberately not distinguished)
/// - `ScytaleError::Encoding` if the decrypted bytes are not valid UTF-8
///   (cannot happen for envelopes produced by [`encrypt`], but foreign
///   input must be handled)
pub fn decrypt(envelope: &str, password: &str) -> Result<String> {
    let parts: Vec<&str> = envelope.split(':').collect();
    if parts.len() != 3 {
        return Err(ScytaleError::Format(format!(
            "Expected salt:nonce:ciphertext (3 fields), got {}",
            parts.len()
        )));
    }

    let salt = codec::decode_token(parts[0])?;
    let nonce_bytes = codec::decode_token(parts[1])?;
    let ciphertext = codec::decode_token(parts[2])?;

    if salt.len() != SALT_LEN {
        return Err(ScytaleError::Format(format!(
            "Salt must decode to {} bytes, got {}",
            SALT_LEN,
            salt.len()
        )));
    }
    if nonce_bytes.len() != NONCE_LEN {
        return Err(ScytaleError::Format(format!(
            "Nonce must decode to {} bytes, got {}",
            NONCE_LEN,
            nonce_bytes.len()
        )));
    }

    let derived = derive_key(password, &salt, PBKDF2_ITERATIONS);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(derived.as_bytes()));
    let nonce = Nonce::from_slice(&nonce_bytes);

    let plaintext = cipher
        .decrypt(nonce, ciphertext.as_ref())
        .map_err(|_| ScytaleError::Authentication)?;

    codec::bytes_to_text(&plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let plaintext = "Hello, World! This is secret data.";
        let password = "test-password-secure-123";

        let envelope = encrypt(plaintext, password);
        let decrypted = decrypt(&envelope, password).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = encrypt("shape check", "password-123");
        let parts: Vec<&str> = envelope.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(codec::decode_token(parts[0]).unwrap().len(), SALT_LEN);
        assert_eq!(codec::decode_token(parts[1]).unwrap().len(), NONCE_LEN);
        // Ciphertext carries the 16-byte GCM tag.
        let ct = codec::decode_token(parts[2]).unwrap();
        assert_eq!(ct.len(), "shape check".len() + 16);
    }

    #[test]
    fn test_wrong_password_fails_authentication() {
        let envelope = encrypt("secret", "password-one");
        let result = decrypt(&envelope, "password-two");
        assert!(matches!(result, Err(ScytaleError::Authentication)));
    }

    #[test]
    fn test_wrong_field_count_is_format_error() {
        assert!(matches!(
            decrypt("onlyonepart", "pw"),
            Err(ScytaleError::Format(_))
        ));
        assert!(matches!(
            decrypt("a:b:c:d", "pw"),
            Err(ScytaleError::Format(_))
        ));
    }

    #[test]
    fn test_malformed_base64_field_is_format_error() {
        let envelope = encrypt("secret", "password-123");
        let mut parts: Vec<String> = envelope.split(':').map(String::from).collect();
        parts[1] = "***".to_string();
        let result = decrypt(&parts.join(":"), "password-123");
        assert!(matches!(result, Err(ScytaleError::Format(_))));
    }

    #[test]
    fn test_wrong_salt_length_is_format_error() {
        let envelope = encrypt("secret", "password-123");
        let mut parts: Vec<String> = envelope.split(':').map(String::from).collect();
        parts[0] = codec::encode_token(b"short");
        let result = decrypt(&parts.join(":"), "password-123");
        assert!(matches!(result, Err(ScytaleError::Format(_))));
    }

    #[test]
    fn test_fresh_salt_nonce_and_ciphertext_per_call() {
        let envelope1 = encrypt("identical plaintext", "identical-password");
        let envelope2 = encrypt("identical plaintext", "identical-password");
        let parts1: Vec<&str> = envelope1.split(':').collect();
        let parts2: Vec<&str> = envelope2.split(':').collect();

        assert_ne!(parts1[0], parts2[0], "salts must differ");
        assert_ne!(parts1[1], parts2[1], "nonces must differ");
        assert_ne!(parts1[2], parts2[2], "ciphertexts must differ");
    }

    #[test]
    fn test_tamper_detection_every_ciphertext_bit() {
        let envelope = encrypt("tamper me", "password-123");
        let parts: Vec<&str> = envelope.split(':').collect();
        let ciphertext = codec::decode_token(parts[2]).unwrap();

        // Flip each bit of one representative byte and one bit of every
        // byte; all must fail authentication, never return altered text.
        for byte_index in 0..ciphertext.len() {
            let mut tampered = ciphertext.clone();
            tampered[byte_index] ^= 0x01;
            let forged = format!(
                "{}:{}:{}",
                parts[0],
                parts[1],
                codec::encode_token(&tampered)
            );
            assert!(
                matches!(decrypt(&forged, "password-123"), Err(ScytaleError::Authentication)),
                "bit flip at byte {} was not caught",
                byte_index
            );
        }
    }

    #[test]
    fn test_corrupted_nonce_fails_authentication() {
        let envelope = encrypt("secret", "password-123");
        let parts: Vec<&str> = envelope.split(':').collect();
        let mut nonce = codec::decode_token(parts[1]).unwrap();
        nonce[0] ^= 0xFF;
        let forged = format!("{}:{}:{}", parts[0], codec::encode_token(&nonce), parts[2]);
        assert!(matches!(
            decrypt(&forged, "password-123"),
            Err(ScytaleError::Authentication)
        ));
    }

    #[test]
    fn test_empty_plaintext_round_trip() {
        let envelope = encrypt("", "password-123");
        assert_eq!(decrypt(&envelope, "password-123").unwrap(), "");
    }

    #[test]
    fn test_unicode_plaintext_round_trip() {
        let plaintext = "秘密のメッセージ 🔐";
        let envelope = encrypt(plaintext, "password-123");
        assert_eq!(decrypt(&envelope, "password-123").unwrap(), plaintext);
    }

    #[test]
    fn test_envelope_does_not_contain_plaintext() {
        let plaintext = "PLAINTEXT_MARKER_123";
        let envelope = encrypt(plaintext, "password-123");
        assert!(!envelope.contains(plaintext));
    }
}
