//! Payload → blob.

use sigil_crypto::{BLOCK_LEN, EntropySource, OsEntropy, SigningKey, cipher, padding};
use sigil_proto::Envelope;
use zeroize::Zeroizing;

use crate::error::CodecError;

/// Bytes the envelope adds around the payload text: JSON punctuation, field
/// names, 64 hex signature characters, and the terminator.
const ENVELOPE_OVERHEAD: usize = 91;

/// Signs, serializes, pads, and encrypts payloads.
///
/// Holds only its entropy source. Keys are passed to every call, so one
/// `Encoder` can serve concurrent callers with unrelated keys.
#[derive(Debug, Clone, Default)]
pub struct Encoder<E = OsEntropy> {
    entropy: E,
}

impl Encoder<OsEntropy> {
    /// Encoder that draws IVs from the OS random source.
    pub fn new() -> Self {
        Self { entropy: OsEntropy::new() }
    }
}

impl<E: EntropySource> Encoder<E> {
    /// Encoder that draws IVs from `entropy`.
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Encode `payload` into `IV || ciphertext`.
    ///
    /// `payload` MUST be valid UTF-8: the envelope carries it as JSON text.
    /// Payloads ending in `=0` or `=equest` encode successfully but are
    /// rewritten by the decoder's legacy repair, so they will not verify.
    ///
    /// Draws one IV from the entropy source per call.
    ///
    /// # Errors
    ///
    /// - `Key` kind if `signing_key` is empty or `encryption_key` is not 16,
    ///   24, or 32 bytes
    /// - `EnvelopeFormat` kind if `payload` is not UTF-8
    /// - `Randomness` kind if no IV could be drawn
    pub fn encode(
        &self,
        payload: &[u8],
        encryption_key: &[u8],
        signing_key: &[u8],
    ) -> Result<Vec<u8>, CodecError> {
        let signing_key = SigningKey::new(signing_key)?;
        let envelope = Envelope::seal(payload, &signing_key)?;

        let mut plaintext =
            Zeroizing::new(Vec::with_capacity(payload.len() + ENVELOPE_OVERHEAD + BLOCK_LEN));
        envelope.encode(&mut plaintext)?;
        padding::pad(&mut plaintext, BLOCK_LEN);

        let blob = cipher::encrypt(&plaintext, encryption_key, &self.entropy)?;

        tracing::debug!(payload_len = payload.len(), blob_len = blob.len(), "encoded message");

        Ok(blob)
    }
}
