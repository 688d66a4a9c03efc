//! Classical cipher implementations.
//!
//! All three transforms are pure functions over text: deterministic,
//! invertible under the same parameters, and total for any input once the
//! dispatch layer has validated the parameters.
//!
//! These ciphers are educational/reversible transforms, not security
//! primitives. Anything that needs confidentiality belongs in [`crate::crypto`].

pub mod caesar;
pub mod vigenere;
pub mod xor;

pub use caesar::{caesar_decrypt, caesar_encrypt};
pub use vigenere::{vigenere_decrypt, vigenere_encrypt};
pub use xor::{xor_decrypt, xor_encrypt};
