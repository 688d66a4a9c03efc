//! Byte-wise keystream XOR cipher.
//!
//! XORs the UTF-8 bytes of the input against a cycled key and emits the
//! result as a Base64 token (raw XOR output is rarely printable). With an
//! empty key the transform degenerates to a plain Base64 encode/decode
//! pass: the bytes are unchanged, only the token step applies.

use crate::codec;
use crate::error::{Result, ScytaleError};

/// XOR `data` in place against a cycled key. No-op for an empty key.
fn xor_with_key(data: &mut [u8], key: &[u8]) {
    if key.is_empty() {
        return;
    }
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key[i % key.len()];
    }
}

/// Encrypt text with a cycled byte key, returning a Base64 token.
///
/// XOR is self-inverse, so [`xor_decrypt`] applies the identical keystream;
/// the two functions differ only in which side of the token encoding they
/// sit on.
pub fn xor_encrypt(text: &str, key: &str) -> String {
    let mut bytes = codec::text_to_bytes(text);
    xor_with_key(&mut bytes, key.as_bytes());
    codec::encode_token(&bytes)
}

/// Decrypt a Base64 token produced by [`xor_encrypt`] under the same key.
///
/// # Errors
///
/// Returns `ScytaleError::Format` if the token is not valid Base64, or if
/// the XOR-ed bytes do not form valid UTF-8 text under this key (which is
/// what a wrong key looks like here).
pub fn xor_decrypt(token: &str, key: &str) -> Result<String> {
    let mut bytes = codec::decode_token(token)?;
    xor_with_key(&mut bytes, key.as_bytes());
    codec::bytes_to_text(&bytes).map_err(|_| {
        ScytaleError::Format(
            "Decoded bytes are not valid UTF-8 text under this key".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let text = "XOR round trip: 日本語 and emoji 🔑";
        let key = "mysecret";
        let token = xor_encrypt(text, key);
        assert_eq!(xor_decrypt(&token, key).unwrap(), text);
    }

    #[test]
    fn test_single_byte_key() {
        let text = "short key still works";
        let token = xor_encrypt(text, "k");
        assert_eq!(xor_decrypt(&token, "k").unwrap(), text);
    }

    #[test]
    fn test_empty_key_is_plain_base64() {
        let text = "no key at all";
        let token = xor_encrypt(text, "");
        // Degenerates to Base64 of the raw bytes.
        assert_eq!(token, codec::encode_token(text.as_bytes()));
        assert_eq!(xor_decrypt(&token, "").unwrap(), text);
    }

    #[test]
    fn test_output_is_token_encoded() {
        let token = xor_encrypt("anything", "key");
        assert!(codec::decode_token(&token).is_ok());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let result = xor_decrypt("***not base64***", "key");
        assert!(matches!(result, Err(ScytaleError::Format(_))));
    }

    #[test]
    fn test_wrong_key_yields_format_error_or_garbage() {
        // A wrong key either breaks UTF-8 (Format error) or decodes to
        // different text; it must never return the original plaintext.
        let text = "very secret message";
        let token = xor_encrypt(text, "correct-key");
        match xor_decrypt(&token, "wrong-key!!") {
            Ok(decoded) => assert_ne!(decoded, text),
            Err(e) => assert!(matches!(e, ScytaleError::Format(_))),
        }
    }
}
