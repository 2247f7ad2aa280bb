//! Decoder configuration.

use sigil_crypto::PaddingMode;

/// Decoder configuration.
///
/// The default accepts everything existing producers emit. Tightening it
/// rejects blobs that older producers may still send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How strictly padding is checked after decryption
    pub padding: PaddingMode,
}

impl DecoderConfig {
    /// Configuration with full PKCS7 padding validation.
    pub fn strict() -> Self {
        Self { padding: PaddingMode::Strict }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        assert_eq!(DecoderConfig::default().padding, PaddingMode::Lenient);
        assert_eq!(DecoderConfig::strict().padding, PaddingMode::Strict);
    }
}
