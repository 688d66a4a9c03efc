//! Byte/text codec primitives.
//!
//! Small helpers shared by every transform: UTF-8 conversion, Base64 token
//! encoding for embedding binary data in textual output, and the secure
//! random source used for salts and nonces.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, ScytaleError};

/// Convert text to its UTF-8 byte representation.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode UTF-8 bytes back into text.
///
/// # Errors
///
/// Returns `ScytaleError::Encoding` if the bytes are not a valid UTF-8
/// sequence.
pub fn bytes_to_text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| ScytaleError::Encoding(format!("Invalid UTF-8 sequence: {}", e)))
}

/// Encode arbitrary bytes as a Base64 token (standard alphabet).
///
/// Round-trip law: `decode_token(&encode_token(b)) == b` for every byte
/// sequence, including the empty one.
pub fn encode_token(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a Base64 token back into bytes.
///
/// # Errors
///
/// Returns `ScytaleError::Format` if the token is not valid Base64.
pub fn decode_token(token: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(token)
        .map_err(|e| ScytaleError::Format(format!("Invalid Base64 token: {}", e)))
}

/// Draw `n` cryptographically secure random bytes from the OS.
///
/// # Panics
///
/// Panics if the platform's secure randomness source is unavailable.
/// Proceeding with a weak generator would silently break every security
/// guarantee of the authenticated encryption scheme, so this failure is
/// fatal and never downgraded.
pub fn secure_random_bytes(n: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; n];
    if let Err(e) = getrandom::getrandom(&mut bytes) {
        panic!("secure random source unavailable: {}", e);
    }
    bytes
}
