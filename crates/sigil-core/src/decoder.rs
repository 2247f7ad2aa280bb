//! Blob → payload.

use sigil_crypto::{BLOCK_LEN, SigningKey, cipher};
use sigil_proto::Envelope;

use crate::{config::DecoderConfig, error::CodecError};

/// Decrypts, unpads, parses, and verifies blobs.
///
/// Stateless apart from its configuration; keys are passed to every call.
///
/// # Security
///
/// Stages run in a fixed order and stop at the first failure. The signature
/// check runs last, so a blob is only accepted once it has decrypted to a
/// well-formed envelope AND its signature matches the (repaired) data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Decoder with the default (lenient) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder with an explicit configuration.
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decode `IV || ciphertext` back into the payload.
    ///
    /// # Errors
    ///
    /// - `InputTooShort` kind if `blob` is at most one block long
    /// - `Key` kind if `encryption_key` is not 16, 24, or 32 bytes, or
    ///   `signing_key` is empty
    /// - `Padding` kind if the ciphertext is misaligned or unpadding fails
    /// - `EnvelopeFormat` kind if the plaintext is not a terminated envelope
    /// - `Signature` kind if the signature is not hex or does not match
    pub fn decode(
        &self,
        blob: &[u8],
        encryption_key: &[u8],
        signing_key: &[u8],
    ) -> Result<Vec<u8>, CodecError> {
        let padded = cipher::decrypt(blob, encryption_key)?;
        let plaintext = self.config.padding.unpad(&padded, BLOCK_LEN)?;
        let envelope = Envelope::decode(plaintext)?;

        let signing_key = SigningKey::new(signing_key)?;
        if !envelope.verify(&signing_key)? {
            tracing::debug!(blob_len = blob.len(), "envelope signature mismatch");
            return Err(CodecError::SignatureMismatch);
        }

        tracing::debug!(blob_len = blob.len(), payload_len = envelope.data.len(), "decoded message");

        Ok(envelope.data.into_bytes())
    }
}
