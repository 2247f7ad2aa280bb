//! Error types for Sigil cryptographic primitives

use thiserror::Error;

/// Errors from padding, signing, and block cipher operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Encryption key is not a valid AES key size
    #[error("invalid encryption key length: expected 16, 24, or 32 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length of the rejected key
        actual: usize,
    },

    /// Signing key has no bytes
    #[error("signing key must not be empty")]
    EmptySigningKey,

    /// The entropy source could not produce a full IV
    #[error("randomness unavailable: {reason}")]
    Randomness {
        /// Why the random source failed
        reason: String,
    },

    /// Padding could not be removed from a decrypted buffer
    #[error("invalid padding: {reason}")]
    InvalidPadding {
        /// Which padding check failed
        reason: String,
    },

    /// Buffer length is not a whole number of cipher blocks
    #[error("input of {len} bytes is not a multiple of the {block_len}-byte block size")]
    MisalignedInput {
        /// Length of the rejected buffer
        len: usize,
        /// Cipher block length
        block_len: usize,
    },

    /// Blob cannot hold an IV and at least one ciphertext block
    #[error("input too short: {len} bytes, need more than {min}")]
    InputTooShort {
        /// Length of the rejected blob
        len: usize,
        /// The blob must be strictly longer than this
        min: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CryptoError::InvalidKeyLength { actual: 20 };
        assert_eq!(
            err.to_string(),
            "invalid encryption key length: expected 16, 24, or 32 bytes, got 20"
        );

        let err = CryptoError::InputTooShort { len: 16, min: 16 };
        assert_eq!(err.to_string(), "input too short: 16 bytes, need more than 16");
    }
}
