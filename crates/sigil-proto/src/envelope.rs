//! Signed envelope carried inside every Sigil blob.
//!
//! Text layout before padding:
//! `{"data":<payload text>,"signature":<64 lowercase hex chars>}` + `0x00`
//!
//! The JSON is compact with fields in declaration order. On decode, every
//! trailing terminator byte is stripped before parsing, unknown fields are
//! ignored, and the legacy suffix repair runs on `data`.

use serde::{Deserialize, Serialize};
use sigil_crypto::{SigningKey, signer};

use crate::{error::EnvelopeError, legacy};

/// Byte appended after the serialized envelope
pub const TERMINATOR: u8 = 0x00;

/// Payload text plus its hex-encoded HMAC-SHA256 signature.
///
/// # Invariants
///
/// - `signature` decodes to exactly [`sigil_crypto::SIGNATURE_LEN`] bytes
///   when the envelope is well formed. A different length is not a parse
///   error; it simply fails verification.
///
/// # Security
///
/// Parsing an envelope proves nothing about its origin. Callers MUST check
/// [`Envelope::verify`] before trusting `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Payload text
    pub data: String,
    /// Lowercase hex HMAC-SHA256 of `data`
    pub signature: String,
}

impl Envelope {
    /// Sign `payload` and wrap it in an envelope.
    ///
    /// # Errors
    ///
    /// - `NonUtf8Payload` if `payload` is not valid UTF-8. The envelope
    ///   carries the payload as JSON text, so only UTF-8 payloads can be
    ///   encoded.
    pub fn seal(payload: &[u8], key: &SigningKey<'_>) -> Result<Self, EnvelopeError> {
        let data = std::str::from_utf8(payload)
            .map_err(|err| EnvelopeError::NonUtf8Payload { valid_up_to: err.valid_up_to() })?;

        Ok(Self { data: data.to_owned(), signature: hex::encode(signer::sign(payload, key)) })
    }

    /// Serialize into `dst`, followed by one [`TERMINATOR`] byte.
    ///
    /// # Errors
    ///
    /// - `Serialize` if JSON encoding fails
    pub fn encode(&self, dst: &mut Vec<u8>) -> Result<(), EnvelopeError> {
        serde_json::to_writer(&mut *dst, self)
            .map_err(|err| EnvelopeError::Serialize { reason: err.to_string() })?;
        dst.push(TERMINATOR);
        Ok(())
    }

    /// Parse an unpadded plaintext back into an envelope.
    ///
    /// Strips all trailing terminator bytes, parses the JSON object, then
    /// applies [`legacy::repair_data_suffix`] to `data`.
    ///
    /// # Errors
    ///
    /// - `MissingTerminator` if `bytes` does not end with [`TERMINATOR`]
    /// - `Malformed` if the remaining text is not a JSON object with string
    ///   fields `data` and `signature`
    pub fn decode(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        let body_len = bytes.iter().rposition(|&b| b != TERMINATOR).map_or(0, |last| last + 1);
        if body_len == bytes.len() {
            return Err(EnvelopeError::MissingTerminator);
        }

        let body = &bytes[..body_len];
        // The derived Deserialize also takes `["data","signature"]`
        let first = body.iter().copied().find(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
        if first != Some(b'{') {
            return Err(EnvelopeError::Malformed { reason: "expected a JSON object".to_owned() });
        }

        let mut envelope: Self = serde_json::from_slice(body)
            .map_err(|err| EnvelopeError::Malformed { reason: err.to_string() })?;

        if let Some(repair) = legacy::repair_data_suffix(&mut envelope.data) {
            tracing::debug!(?repair, "repaired legacy data suffix");
        }

        Ok(envelope)
    }

    /// Raw signature bytes.
    ///
    /// # Errors
    ///
    /// - `SignatureEncoding` if `signature` is not valid hex
    pub fn signature_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        hex::decode(&self.signature)
            .map_err(|err| EnvelopeError::SignatureEncoding { reason: err.to_string() })
    }

    /// Check the signature against `data` in constant time.
    ///
    /// Returns `Ok(false)` on mismatch.
    ///
    /// # Errors
    ///
    /// - `SignatureEncoding` if `signature` is not valid hex
    pub fn verify(&self, key: &SigningKey<'_>) -> Result<bool, EnvelopeError> {
        let expected = self.signature_bytes()?;
        Ok(signer::verify(self.data.as_bytes(), key, &expected))
    }
}
