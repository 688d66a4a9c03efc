//! Transform registry and dispatch.
//!
//! Maps a cipher identifier + mode + raw parameter set to the correct
//! primitive. Raw parameters arrive as untyped strings (the shape a form
//! or CLI produces) and are validated against the selected cipher's
//! required shape *before* any transform runs; a mismatch is a
//! [`ScytaleError::Parameter`] and nothing else happens.

use serde::{Deserialize, Serialize};

use crate::cipher;
use crate::codec;
use crate::crypto;
use crate::error::{Result, ScytaleError};

/// The fixed set of supported transforms.
///
/// Exhaustive matching over this enum guarantees at compile time that
/// every cipher has a handler. The serialized names (`caesar`, `vigenere`,
/// `xor`, `base64`, `aesgcm`) are part of the share-token wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherId {
    /// Fixed-shift letter rotation
    Caesar,
    /// Running-key letter substitution
    Vigenere,
    /// Byte-wise keystream XOR
    Xor,
    /// Plain Base64 encoding (reversible, not secret)
    Base64,
    /// Password-based AES-256-GCM
    AesGcm,
}

impl CipherId {
    /// The wire name used in share tokens and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherId::Caesar => "caesar",
            CipherId::Vigenere => "vigenere",
            CipherId::Xor => "xor",
            CipherId::Base64 => "base64",
            CipherId::AesGcm => "aesgcm",
        }
    }
}

impl std::str::FromStr for CipherId {
    type Err = ScytaleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "caesar" => Ok(CipherId::Caesar),
            "vigenere" => Ok(CipherId::Vigenere),
            "xor" => Ok(CipherId::Xor),
            "base64" => Ok(CipherId::Base64),
            "aesgcm" => Ok(CipherId::AesGcm),
            other => Err(ScytaleError::Format(format!("Unknown cipher: {}", other))),
        }
    }
}

impl std::fmt::Display for CipherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a transform.
///
/// For the symmetric classical ciphers, `Decrypt` is the algebraic inverse
/// of `Encrypt` under the same parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Encrypt => f.write_str("encrypt"),
            Mode::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Untyped parameters as supplied by a form, CLI flag, or share token.
#[derive(Debug, Clone, Default)]
pub struct RawParams {
    /// Caesar shift amount (must parse as an integer)
    pub shift: Option<String>,

    /// Vigenère / XOR key
    pub key: Option<String>,

    /// AES-GCM password (never serialized; see `share`)
    pub password: Option<String>,
}

/// Parameters validated against the shape required by a [`CipherId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherParams {
    /// Caesar: normalized later, any integer accepted here
    Shift(i32),
    /// Vigenère: ASCII letters, possibly empty (identity)
    LetterKey(String),
    /// XOR: any string, possibly empty (plain Base64 pass)
    ByteKey(String),
    /// Base64: no parameters
    Empty,
    /// AES-GCM: non-empty password
    Password(String),
}

impl CipherParams {
    /// Validate raw parameters for the given cipher.
    ///
    /// # Errors
    ///
    /// Returns [`ScytaleError::Parameter`] naming the missing or invalid
    /// field. Missing keys for Vigenère and XOR are *not* errors: the empty
    /// key is specified as the identity / plain-encoding degenerate case.
    pub fn validate(cipher: CipherId, raw: &RawParams) -> Result<Self> {
        match cipher {
            CipherId::Caesar => {
                let shift = raw
                    .shift
                    .as_deref()
                    .ok_or_else(|| ScytaleError::Parameter("shift is required".to_string()))?;
                let shift: i32 = shift.trim().parse().map_err(|_| {
                    ScytaleError::Parameter(format!("shift must be an integer, got {:?}", shift))
                })?;
                Ok(CipherParams::Shift(shift))
            }
            CipherId::Vigenere => {
                let key = raw.key.clone().unwrap_or_default();
                if !key.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ScytaleError::Parameter(
                        "key must contain only letters".to_string(),
                    ));
                }
                Ok(CipherParams::LetterKey(key))
            }
            CipherId::Xor => Ok(CipherParams::ByteKey(raw.key.clone().unwrap_or_default())),
            CipherId::Base64 => Ok(CipherParams::Empty),
            CipherId::AesGcm => {
                let password = raw
                    .password
                    .as_deref()
                    .ok_or_else(|| ScytaleError::Parameter("password is required".to_string()))?;
                if password.is_empty() {
                    return Err(ScytaleError::Parameter(
                        "password must not be empty".to_string(),
                    ));
                }
                Ok(CipherParams::Password(password.to_string()))
            }
        }
    }
}

/// Validate parameters and run the selected transform.
///
/// Returns the transformed text, or the first failure encountered; no
/// partial results are produced.
pub fn apply(cipher: CipherId, mode: Mode, raw: &RawParams, text: &str) -> Result<String> {
    let params = CipherParams::validate(cipher, raw)?;

    match (cipher, params) {
        (CipherId::Caesar, CipherParams::Shift(shift)) => Ok(match mode {
            Mode::Encrypt => cipher::caesar_encrypt(text, shift),
            Mode::Decrypt => cipher::caesar_decrypt(text, shift),
        }),
        (CipherId::Vigenere, CipherParams::LetterKey(key)) => Ok(match mode {
            Mode::Encrypt => cipher::vigenere_encrypt(text, &key),
            Mode::Decrypt => cipher::vigenere_decrypt(text, &key),
        }),
        (CipherId::Xor, CipherParams::ByteKey(key)) => match mode {
            Mode::Encrypt => Ok(cipher::xor_encrypt(text, &key)),
            Mode::Decrypt => cipher::xor_decrypt(text, &key),
        },
        (CipherId::Base64, CipherParams::Empty) => match mode {
            Mode::Encrypt => Ok(codec::encode_token(text.as_bytes())),
            Mode::Decrypt => {
                let bytes = codec::decode_token(text)?;
                codec::bytes_to_text(&bytes)
            }
        },
        (CipherId::AesGcm, CipherParams::Password(password)) => match mode {
            Mode::Encrypt => Ok(crypto::encrypt(text, &password)),
            // Tolerate copy-paste artifacts around the pasted envelope.
            Mode::Decrypt => crypto::decrypt(text.trim(), &password),
        },
        // validate() returns the matching variant for each cipher.
        _ => unreachable!("parameter shape validated against cipher id"),
    }
}
