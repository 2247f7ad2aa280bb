//! Envelope error types

use thiserror::Error;

/// Errors from envelope serialization and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// Payload bytes are not valid UTF-8 and cannot be carried as text
    #[error("payload is not valid UTF-8 (valid up to byte {valid_up_to})")]
    NonUtf8Payload {
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },

    /// Decrypted plaintext does not end with a terminator byte
    #[error("envelope is missing its terminator byte")]
    MissingTerminator,

    /// Envelope text is not a well-formed `{data, signature}` object
    #[error("malformed envelope: {reason}")]
    Malformed {
        /// Parser diagnostic
        reason: String,
    },

    /// Envelope could not be serialized
    #[error("envelope serialization failed: {reason}")]
    Serialize {
        /// Serializer diagnostic
        reason: String,
    },

    /// Signature field is not valid hexadecimal
    #[error("signature is not valid hex: {reason}")]
    SignatureEncoding {
        /// Hex decoder diagnostic
        reason: String,
    },
}
