//! Host-facing helper surface.
//!
//! Scripting hosts pass keys as hex text and expect an empty result rather
//! than an error on failure. [`HelperModule`] provides both shapes: the
//! `Option` methods for that contract, and `try_` methods that keep the
//! error.

use sigil_crypto::{EntropySource, OsEntropy};
use thiserror::Error;

use crate::{
    config::DecoderConfig,
    decoder::Decoder,
    encoder::Encoder,
    error::{CodecError, ErrorKind},
};

/// Which hex argument failed to parse
pub const ENCRYPTION_KEY_FIELD: &str = "encryption key";
/// Which hex argument failed to parse
pub const SIGNING_KEY_FIELD: &str = "signing key";

/// Errors from the `try_` methods of [`HelperModule`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A key argument is not valid hex
    #[error("{field} is not valid hex")]
    InvalidHex {
        /// Name of the offending argument
        field: &'static str,
    },

    /// Encoding or decoding failed
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl HostError {
    /// Classify this error. Unparseable key text counts as a key error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidHex { .. } => ErrorKind::Key,
            Self::Codec(err) => err.kind(),
        }
    }
}

/// Lowercase hex text of `bytes`.
pub fn hex_encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Bytes of hex `text` (either case), or `None` on odd length or a non-hex
/// character.
pub fn hex_decode(text: &str) -> Option<Vec<u8>> {
    hex::decode(text).ok()
}

/// Encoder and decoder behind hex-key helper methods.
#[derive(Debug, Clone, Default)]
pub struct HelperModule<E = OsEntropy> {
    encoder: Encoder<E>,
    decoder: Decoder,
}

impl HelperModule<OsEntropy> {
    /// Helper with OS entropy and lenient decoding.
    pub fn new() -> Self {
        Self { encoder: Encoder::new(), decoder: Decoder::new() }
    }
}

impl<E: EntropySource> HelperModule<E> {
    /// Helper with explicit entropy and decoder configuration.
    pub fn with_parts(entropy: E, config: DecoderConfig) -> Self {
        Self { encoder: Encoder::with_entropy(entropy), decoder: Decoder::with_config(config) }
    }

    /// See [`hex_encode`].
    pub fn hex_encode(&self, bytes: &[u8]) -> String {
        hex_encode(bytes)
    }

    /// See [`hex_decode`].
    pub fn hex_decode(&self, text: &str) -> Option<Vec<u8>> {
        hex_decode(text)
    }

    /// Encode `payload` with hex-encoded keys, or `None` on any failure.
    pub fn encode_message(
        &self,
        payload: &str,
        encryption_key_hex: &str,
        signing_key_hex: &str,
    ) -> Option<Vec<u8>> {
        self.try_encode_message(payload, encryption_key_hex, signing_key_hex)
            .inspect_err(|err| tracing::debug!(kind = %err.kind(), %err, "encode_message failed"))
            .ok()
    }

    /// Decode `blob` with hex-encoded keys, or `None` on any failure.
    pub fn decode_message(
        &self,
        blob: &[u8],
        encryption_key_hex: &str,
        signing_key_hex: &str,
    ) -> Option<Vec<u8>> {
        self.try_decode_message(blob, encryption_key_hex, signing_key_hex)
            .inspect_err(|err| tracing::debug!(kind = %err.kind(), %err, "decode_message failed"))
            .ok()
    }

    /// Encode `payload` with hex-encoded keys.
    ///
    /// # Errors
    ///
    /// - `InvalidHex` if either key is not hex
    /// - `Codec` for any [`Encoder::encode`] failure
    pub fn try_encode_message(
        &self,
        payload: &str,
        encryption_key_hex: &str,
        signing_key_hex: &str,
    ) -> Result<Vec<u8>, HostError> {
        let (encryption_key, signing_key) = parse_keys(encryption_key_hex, signing_key_hex)?;
        Ok(self.encoder.encode(payload.as_bytes(), &encryption_key, &signing_key)?)
    }

    /// Decode `blob` with hex-encoded keys.
    ///
    /// # Errors
    ///
    /// - `InvalidHex` if either key is not hex
    /// - `Codec` for any [`Decoder::decode`] failure
    pub fn try_decode_message(
        &self,
        blob: &[u8],
        encryption_key_hex: &str,
        signing_key_hex: &str,
    ) -> Result<Vec<u8>, HostError> {
        let (encryption_key, signing_key) = parse_keys(encryption_key_hex, signing_key_hex)?;
        Ok(self.decoder.decode(blob, &encryption_key, &signing_key)?)
    }
}

/// Decoded key bytes, wiped on drop
pub type KeyBytes = zeroize::Zeroizing<Vec<u8>>;

/// Decode the hex-encoded encryption and signing keys.
///
/// # Errors
///
/// - `InvalidHex` naming the first field that is not valid hex
pub fn parse_keys(
    encryption_key_hex: &str,
    signing_key_hex: &str,
) -> Result<(KeyBytes, KeyBytes), HostError> {
    let encryption_key = hex_decode(encryption_key_hex)
        .ok_or(HostError::InvalidHex { field: ENCRYPTION_KEY_FIELD })?;
    let signing_key =
        hex_decode(signing_key_hex).ok_or(HostError::InvalidHex { field: SIGNING_KEY_FIELD })?;

    Ok((KeyBytes::new(encryption_key), KeyBytes::new(signing_key)))
}
