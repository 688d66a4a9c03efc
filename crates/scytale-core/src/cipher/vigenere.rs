//! Vigenère running-key substitution cipher.
//!
//! Each letter of the input is shifted by the value of the current key
//! letter. The key cursor advances only when a letter is consumed, so
//! punctuation and whitespace do not desynchronize encryption and
//! decryption. An empty key is the identity transform.

/// Apply a running-key substitution over `text`.
///
/// `decrypt` selects the direction: subtraction instead of addition.
fn substitute(text: &str, key: &str, decrypt: bool) -> String {
    if key.is_empty() {
        return text.to_string();
    }

    let key: Vec<u8> = key
        .to_lowercase()
        .bytes()
        .map(|b| b - b'a')
        .collect();

    let mut cursor = 0usize;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let k = key[cursor % key.len()];
                cursor += 1;
                let offset = c as u8 - base;
                let shifted = if decrypt {
                    (offset + 26 - k) % 26
                } else {
                    (offset + k) % 26
                };
                (shifted + base) as char
            } else {
                c
            }
        })
        .collect()
}

/// Encrypt text with a running key.
///
/// The key must consist of ASCII letters (the dispatch layer enforces
/// this); it is lowercased before use. An empty key returns the input
/// unchanged.
///
/// # Examples
///
/// ```
/// use scytale_core::cipher::{vigenere_decrypt, vigenere_encrypt};
///
/// let ct = vigenere_encrypt("attack at dawn", "lemon");
/// assert_eq!(ct, "lxfopv ef rnhr");
/// assert_eq!(vigenere_decrypt(&ct, "lemon"), "attack at dawn");
/// ```
pub fn vigenere_encrypt(text: &str, key: &str) -> String {
    substitute(text, key, false)
}

/// Decrypt text encrypted with [`vigenere_encrypt`] under the same key.
pub fn vigenere_decrypt(text: &str, key: &str) -> String {
    substitute(text, key, true)
}
