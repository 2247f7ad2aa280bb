//! Entropy source abstraction for IV generation.
//!
//! Decouples the block cipher transport from the OS random source so that
//! known-answer tests can supply fixed IVs while production draws fresh bytes
//! on every call.

use crate::error::CryptoError;

/// Source of cryptographically secure random bytes.
///
/// # Invariants
///
/// - `fill` either writes every byte of `buffer` or returns an error; a short
///   read is never reported as success
/// - Implementations used in production MUST be cryptographically secure
/// - Implementations MUST be safe to call from many threads at once and MUST
///   NOT hand out the same bytes twice
pub trait EntropySource: Send + Sync {
    /// Fill `buffer` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// - `Randomness` if the source cannot produce `buffer.len()` bytes
    fn fill(&self, buffer: &mut [u8]) -> Result<(), CryptoError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill(&self, buffer: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill(buffer)
    }
}

/// Production entropy from the operating system RNG.
///
/// Uses getrandom (e.g., `getrandom(2)` on Linux, `BCryptGenRandom` on
/// Windows). Holds no state and no buffer; every call goes to the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Create a handle to the OS random source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    #[allow(clippy::disallowed_methods)]
    fn fill(&self, buffer: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::fill(buffer).map_err(|err| CryptoError::Randomness { reason: err.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::IV_LEN;

    struct Exhausted;

    impl EntropySource for Exhausted {
        fn fill(&self, _buffer: &mut [u8]) -> Result<(), CryptoError> {
            Err(CryptoError::Randomness { reason: "exhausted".to_string() })
        }
    }

    #[test]
    fn successive_ivs_differ() {
        let env = OsEntropy::new();

        let ivs: HashSet<[u8; IV_LEN]> = (0..64)
            .map(|_| {
                let mut iv = [0u8; IV_LEN];
                env.fill(&mut iv).unwrap();
                iv
            })
            .collect();

        assert_eq!(ivs.len(), 64);
    }

    #[test]
    fn os_entropy_fills_large_buffers() {
        // getrandom may serve large requests in several chunks
        let mut bytes = vec![0u8; 1 << 16];
        OsEntropy::new().fill(&mut bytes).unwrap();

        assert!(bytes[bytes.len() - IV_LEN..].iter().any(|&b| b != 0));
    }

    #[test]
    fn os_entropy_accepts_empty_buffer() {
        OsEntropy::new().fill(&mut []).unwrap();
    }

    #[test]
    fn references_forward_failures() {
        fn draw(source: impl EntropySource) -> Result<[u8; IV_LEN], CryptoError> {
            let mut iv = [0u8; IV_LEN];
            source.fill(&mut iv)?;
            Ok(iv)
        }

        let source = Exhausted;
        assert_eq!(draw(&source), Err(CryptoError::Randomness { reason: "exhausted".to_string() }));

        let dynamic: &dyn EntropySource = &source;
        assert!(draw(dynamic).is_err());
        assert!(draw(&OsEntropy::new()).is_ok());
    }
}
