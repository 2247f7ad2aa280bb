//! CLI error types.

use sigil_core::{CodecError, ErrorKind, HostError};
use thiserror::Error;

/// Errors from running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Key argument was not hex, or the codec rejected the input
    #[error("{kind} error: {0}", kind = .0.kind())]
    Host(#[from] HostError),

    /// `--hex` input, or `hex-decode` input, was not hex
    #[error("input is not valid hex")]
    InvalidInputHex,

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Codec classification, if this is a codec or key failure.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Host(err) => Some(err.kind()),
            Self::InvalidInputHex | Self::Io(_) => None,
        }
    }
}

impl From<CodecError> for CliError {
    fn from(err: CodecError) -> Self {
        Self::Host(HostError::Codec(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_kind() {
        let err = CliError::from(CodecError::SignatureMismatch);
        assert_eq!(err.to_string(), "signature error: invalid signature");
        assert_eq!(err.kind(), Some(ErrorKind::Signature));

        let err = CliError::from(HostError::InvalidHex { field: "signing key" });
        assert_eq!(err.to_string(), "key error: signing key is not valid hex");
    }
}
