//! Codec error types.

use std::fmt;

use sigil_crypto::CryptoError;
use sigil_proto::EnvelopeError;
use thiserror::Error;

/// Coarse classification of codec failures.
///
/// Every [`CodecError`] maps to exactly one kind. None of them are transient:
/// retrying the same inputs fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Encryption key has the wrong length, or signing key is empty
    Key,
    /// The random source could not produce an IV
    Randomness,
    /// Padding could not be removed, or data is not block aligned
    Padding,
    /// Envelope could not be built or parsed
    EnvelopeFormat,
    /// Signature is malformed or does not match
    Signature,
    /// Blob is not longer than one cipher block
    InputTooShort,
}

impl ErrorKind {
    /// Stable lowercase name, suitable for logs and exit messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Randomness => "randomness",
            Self::Padding => "padding",
            Self::EnvelopeFormat => "envelope format",
            Self::Signature => "signature",
            Self::InputTooShort => "input too short",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from [`crate::Encoder::encode`] and [`crate::Decoder::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Padding, signing key, or block cipher failure
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Envelope serialization or parsing failure
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// Envelope parsed but its signature does not match its data
    #[error("invalid signature")]
    SignatureMismatch,
}

impl CodecError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Crypto(err) => match err {
                CryptoError::InvalidKeyLength { .. } | CryptoError::EmptySigningKey => {
                    ErrorKind::Key
                },
                CryptoError::Randomness { .. } => ErrorKind::Randomness,
                CryptoError::InvalidPadding { .. } | CryptoError::MisalignedInput { .. } => {
                    ErrorKind::Padding
                },
                CryptoError::InputTooShort { .. } => ErrorKind::InputTooShort,
            },
            Self::Envelope(err) => match err {
                EnvelopeError::NonUtf8Payload { .. }
                | EnvelopeError::MissingTerminator
                | EnvelopeError::Malformed { .. }
                | EnvelopeError::Serialize { .. } => ErrorKind::EnvelopeFormat,
                EnvelopeError::SignatureEncoding { .. } => ErrorKind::Signature,
            },
            Self::SignatureMismatch => ErrorKind::Signature,
        }
    }
}
