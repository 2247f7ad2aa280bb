//! HMAC-SHA256 envelope signatures
//!
//! The signature covers the payload text only; the IV and ciphertext are
//! protected indirectly because any corruption of them either breaks padding
//! and parsing or changes the recovered text.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CryptoError;

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 digest in bytes
pub const SIGNATURE_LEN: usize = 32;

/// Borrowed, validated signing key.
///
/// Any non-empty byte string is accepted. The key is borrowed for the duration
/// of a single call and is never copied or retained.
#[derive(Clone, Copy)]
pub struct SigningKey<'a> {
    bytes: &'a [u8],
}

impl<'a> SigningKey<'a> {
    /// Validate raw key bytes.
    ///
    /// # Errors
    ///
    /// - `EmptySigningKey` if `bytes` is empty
    pub fn new(bytes: &'a [u8]) -> Result<Self, CryptoError> {
        if bytes.is_empty() {
            return Err(CryptoError::EmptySigningKey);
        }
        Ok(Self { bytes })
    }

    fn mac(&self) -> HmacSha256 {
        let Ok(mac) = HmacSha256::new_from_slice(self.bytes) else {
            unreachable!("HMAC accepts keys of any length");
        };
        mac
    }
}

impl std::fmt::Debug for SigningKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").field("len", &self.bytes.len()).finish_non_exhaustive()
    }
}

/// Compute the signature of `payload`.
pub fn sign(payload: &[u8], key: &SigningKey<'_>) -> [u8; SIGNATURE_LEN] {
    let mut mac = key.mac();
    mac.update(payload);
    mac.finalize().into_bytes().into()
}

/// Check `expected` against the signature of `payload` in constant time.
///
/// A mismatch (including an `expected` of the wrong length) is a normal
/// outcome and returns `false`.
pub fn verify(payload: &[u8], key: &SigningKey<'_>, expected: &[u8]) -> bool {
    let mut mac = key.mac();
    mac.update(payload);
    mac.verify_slice(expected).is_ok()
}
