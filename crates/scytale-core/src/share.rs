//! Share-token serialization envelope.
//!
//! Packs a cipher selection, its non-secret parameters, and the input text
//! into a single Base64 token suitable for a URL fragment or any other
//! text-only channel. The AES-GCM password is excluded *by construction*:
//! [`ShareParams`] has no password field, so there is no code path that
//! could embed one.
//!
//! Decoding is tolerant of tokens produced by older or foreign writers:
//! unknown JSON fields are ignored and missing fields fall back to
//! defaults (mode=encrypt, cipher=caesar, empty input). A cipher id
//! outside the known set is still rejected.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::dispatch::{CipherId, Mode, RawParams};
use crate::error::{Result, ScytaleError};

/// Non-secret cipher parameters carried by a share token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareParams {
    /// Caesar shift, kept as the string the user typed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,

    /// Vigenère / XOR key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A cipher selection + parameters + input, ready for sharing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareEnvelope {
    /// Transform direction
    #[serde(default = "default_mode")]
    pub mode: Mode,

    /// Selected cipher
    #[serde(default = "default_cipher")]
    pub cipher: CipherId,

    /// The plaintext or ciphertext being shared
    #[serde(default)]
    pub input: String,

    /// Non-secret parameters
    #[serde(default)]
    pub params: ShareParams,
}

fn default_mode() -> Mode {
    Mode::Encrypt
}

fn default_cipher() -> CipherId {
    CipherId::Caesar
}

impl ShareEnvelope {
    /// Build an envelope from raw dispatch parameters.
    ///
    /// Only the shift and key survive; a password in `raw` is dropped here
    /// and cannot reach the serialized form.
    pub fn new(mode: Mode, cipher: CipherId, raw: &RawParams, input: &str) -> Self {
        Self {
            mode,
            cipher,
            input: input.to_string(),
            params: ShareParams {
                shift: raw.shift.clone(),
                key: raw.key.clone(),
            },
        }
    }

    /// Convert the carried parameters back into dispatch form.
    ///
    /// The password is always `None`; for AES-GCM the consumer must obtain
    /// it out of band.
    pub fn raw_params(&self) -> RawParams {
        RawParams {
            shift: self.params.shift.clone(),
            key: self.params.key.clone(),
            password: None,
        }
    }
}

/// Serialize an envelope to a compact Base64 token.
pub fn encode(envelope: &ShareEnvelope) -> String {
    // Infallible: ShareEnvelope contains only strings and unit enums.
    let json = serde_json::to_string(envelope)
        .unwrap_or_else(|_| unreachable!("ShareEnvelope serialization cannot fail"));
    codec::encode_token(json.as_bytes())
}

/// Decode a Base64 token back into an envelope.
///
/// # Errors
///
/// Returns `ScytaleError::Format` on malformed Base64, malformed or
/// truncated JSON, or a cipher/mode value outside the known enumeration.
pub fn decode(token: &str) -> Result<ShareEnvelope> {
    let bytes = codec::decode_token(token)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ScytaleError::Format(format!("Invalid share token: {}", e)))
}
