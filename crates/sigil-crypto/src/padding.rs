//! PKCS7-style block padding
//!
//! Every pad byte holds the pad length. A buffer that is already block
//! aligned still receives a full block of padding, so removal is never
//! ambiguous.
//!
//! Removal comes in two strengths. [`unpad`] trusts the final count byte and
//! only checks that it fits inside the buffer; this is the behaviour existing
//! producers rely on. [`unpad_strict`] is conforming PKCS7 and also checks the
//! count against the block length and every pad byte against the count.

use crate::error::CryptoError;

/// How strictly padding is validated on removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingMode {
    /// Trust the count byte (only `count <= len` is enforced)
    #[default]
    Lenient,
    /// Full PKCS7 validation of count and pad bytes
    Strict,
}

impl PaddingMode {
    /// Remove padding from `data` according to this mode.
    pub fn unpad<'a>(self, data: &'a [u8], block_len: usize) -> Result<&'a [u8], CryptoError> {
        match self {
            Self::Lenient => unpad(data),
            Self::Strict => unpad_strict(data, block_len),
        }
    }
}

/// Pad `data` in place up to the next multiple of `block_len`.
///
/// Appends `n = block_len - (len % block_len)` bytes of value `n`.
///
/// # Panics
///
/// If `block_len` is 0 or larger than 255 (the count must fit in one byte).
pub fn pad(data: &mut Vec<u8>, block_len: usize) {
    assert!((1..=255).contains(&block_len), "block length must be in 1..=255");

    let count = block_len - data.len() % block_len;
    debug_assert!((1..=block_len).contains(&count));

    data.resize(data.len() + count, count as u8);
}

/// Remove padding, trusting the final count byte.
///
/// # Errors
///
/// - `InvalidPadding` if `data` is empty or the count exceeds `data.len()`
pub fn unpad(data: &[u8]) -> Result<&[u8], CryptoError> {
    let Some(&last) = data.last() else {
        return Err(CryptoError::InvalidPadding { reason: "empty input".to_string() });
    };

    let count = usize::from(last);
    if count > data.len() {
        return Err(CryptoError::InvalidPadding {
            reason: format!("pad count {count} exceeds buffer length {}", data.len()),
        });
    }

    Ok(&data[..data.len() - count])
}

/// Remove padding with full PKCS7 validation.
///
/// # Errors
///
/// - `InvalidPadding` if `data` is empty, the count is zero or larger than
///   `block_len`, the count exceeds `data.len()`, or any pad byte differs from
///   the count
pub fn unpad_strict(data: &[u8], block_len: usize) -> Result<&[u8], CryptoError> {
    let Some(&last) = data.last() else {
        return Err(CryptoError::InvalidPadding { reason: "empty input".to_string() });
    };

    let count = usize::from(last);
    if count == 0 || count > block_len {
        return Err(CryptoError::InvalidPadding {
            reason: format!("pad count {count} outside 1..={block_len}"),
        });
    }
    if count > data.len() {
        return Err(CryptoError::InvalidPadding {
            reason: format!("pad count {count} exceeds buffer length {}", data.len()),
        });
    }

    let (body, tail) = data.split_at(data.len() - count);
    if tail.iter().any(|&b| b != last) {
        return Err(CryptoError::InvalidPadding {
            reason: "pad bytes do not match pad count".to_string(),
        });
    }

    Ok(body)
}
