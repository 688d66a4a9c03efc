//! Caesar shift cipher.
//!
//! Rotates ASCII letters by a fixed amount, preserving case. Non-letter
//! characters pass through unchanged.

/// Normalize an arbitrary (possibly negative) shift into `[0, 26)`.
fn normalize_shift(shift: i32) -> u8 {
    (shift.rem_euclid(26)) as u8
}

/// Encrypt text by rotating each ASCII letter `shift` positions forward.
///
/// The shift is normalized into `[0, 26)` first, so any integer (including
/// negative values) is accepted.
///
/// # Examples
///
/// ```
/// use scytale_core::cipher::caesar_encrypt;
///
/// assert_eq!(caesar_encrypt("Hello, World!", 3), "Khoor, Zruog!");
/// ```
pub fn caesar_encrypt(text: &str, shift: i32) -> String {
    let shift = normalize_shift(shift);
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                (((c as u8 - base + shift) % 26) + base) as char
            } else {
                c
            }
        })
        .collect()
}

/// Decrypt text encrypted with [`caesar_encrypt`] under the same shift.
///
/// Algebraically this is encryption with the inverse shift
/// `(26 - shift) mod 26`.
pub fn caesar_decrypt(text: &str, shift: i32) -> String {
    caesar_encrypt(text, -shift)
}
