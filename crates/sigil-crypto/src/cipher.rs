//! AES-CBC block cipher transport
//!
//! Wire layout: `[IV: 16 bytes] + [ciphertext: N * 16 bytes]`
//!
//! Padding is NOT applied or checked here. [`encrypt`] expects block-aligned
//! plaintext (see [`crate::padding::pad`]) and [`decrypt`] returns the padded
//! plaintext for the caller to unpad.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::{
    BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit, block_padding::NoPadding,
};
use zeroize::Zeroizing;

use crate::{entropy::EntropySource, error::CryptoError};

/// AES block length in bytes
pub const BLOCK_LEN: usize = 16;

/// CBC initialization vector length (one block)
pub const IV_LEN: usize = BLOCK_LEN;

/// AES key-size variant, selected by key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 16-byte key
    Aes128,
    /// 24-byte key
    Aes192,
    /// 32-byte key
    Aes256,
}

impl KeySize {
    /// Key-size variant for a key of `len` bytes, if any.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }
}

/// Borrowed, validated AES encryption key.
///
/// Borrows the caller's bytes for one call; nothing is copied or cached.
#[derive(Clone, Copy)]
pub struct EncryptionKey<'a> {
    bytes: &'a [u8],
    size: KeySize,
}

impl<'a> EncryptionKey<'a> {
    /// Validate raw key bytes.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength` unless `bytes` is 16, 24, or 32 bytes long
    pub fn new(bytes: &'a [u8]) -> Result<Self, CryptoError> {
        let size =
            KeySize::from_len(bytes.len()).ok_or(CryptoError::InvalidKeyLength { actual: bytes.len() })?;
        Ok(Self { bytes, size })
    }

    /// AES variant selected by this key.
    pub fn size(&self) -> KeySize {
        self.size
    }
}

impl std::fmt::Debug for EncryptionKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKey").field("size", &self.size).finish_non_exhaustive()
    }
}

/// Encrypt block-aligned `plaintext` under a fresh random IV.
///
/// Returns `IV || ciphertext`.
///
/// # Errors
///
/// - `InvalidKeyLength` if `key` is not 16, 24, or 32 bytes (checked before
///   any randomness is drawn)
/// - `Randomness` if `entropy` cannot produce a full IV
/// - `MisalignedInput` if `plaintext` is not a multiple of [`BLOCK_LEN`]
pub fn encrypt(
    plaintext: &[u8],
    key: &[u8],
    entropy: &impl EntropySource,
) -> Result<Vec<u8>, CryptoError> {
    let key = EncryptionKey::new(key)?;

    let mut iv = [0u8; IV_LEN];
    entropy.fill(&mut iv)?;

    encrypt_blocks(plaintext, &key, &iv)
}

/// Encrypt block-aligned `plaintext` under the given IV.
///
/// Deterministic core of [`encrypt`]. Reusing an IV under the same key leaks
/// plaintext equality, so production callers use [`encrypt`].
///
/// # Errors
///
/// - `InvalidKeyLength` if `key` is not 16, 24, or 32 bytes
/// - `MisalignedInput` if `plaintext` is not a multiple of [`BLOCK_LEN`]
pub fn encrypt_with_iv(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8; IV_LEN],
) -> Result<Vec<u8>, CryptoError> {
    let key = EncryptionKey::new(key)?;
    encrypt_blocks(plaintext, &key, iv)
}

/// Split `blob` into IV and ciphertext and decrypt.
///
/// Returns the still-padded plaintext. The buffer is zeroized on drop.
///
/// # Errors
///
/// - `InputTooShort` if `blob` is not longer than one block (checked first)
/// - `InvalidKeyLength` if `key` is not 16, 24, or 32 bytes
/// - `MisalignedInput` if the ciphertext is not a multiple of [`BLOCK_LEN`]
pub fn decrypt(blob: &[u8], key: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if blob.len() <= IV_LEN {
        return Err(CryptoError::InputTooShort { len: blob.len(), min: IV_LEN });
    }

    let key = EncryptionKey::new(key)?;
    let (iv, ciphertext) = blob.split_at(IV_LEN);
    check_aligned(ciphertext.len())?;

    tracing::trace!(key_size = ?key.size(), len = ciphertext.len(), "decrypting blob");

    let mut plaintext = Zeroizing::new(ciphertext.to_vec());
    match key.size() {
        KeySize::Aes128 => cbc_decrypt::<Aes128>(key.bytes, iv, &mut plaintext)?,
        KeySize::Aes192 => cbc_decrypt::<Aes192>(key.bytes, iv, &mut plaintext)?,
        KeySize::Aes256 => cbc_decrypt::<Aes256>(key.bytes, iv, &mut plaintext)?,
    }

    Ok(plaintext)
}

fn encrypt_blocks(
    plaintext: &[u8],
    key: &EncryptionKey<'_>,
    iv: &[u8; IV_LEN],
) -> Result<Vec<u8>, CryptoError> {
    check_aligned(plaintext.len())?;

    tracing::trace!(key_size = ?key.size(), len = plaintext.len(), "encrypting blocks");

    let mut blob = Vec::with_capacity(IV_LEN + plaintext.len());
    blob.extend_from_slice(iv);
    blob.extend_from_slice(plaintext);

    let body = &mut blob[IV_LEN..];
    match key.size() {
        KeySize::Aes128 => cbc_encrypt::<Aes128>(key.bytes, iv, body)?,
        KeySize::Aes192 => cbc_encrypt::<Aes192>(key.bytes, iv, body)?,
        KeySize::Aes256 => cbc_encrypt::<Aes256>(key.bytes, iv, body)?,
    }

    Ok(blob)
}

fn check_aligned(len: usize) -> Result<(), CryptoError> {
    if len % BLOCK_LEN != 0 {
        return Err(CryptoError::MisalignedInput { len, block_len: BLOCK_LEN });
    }
    Ok(())
}

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let cipher = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CryptoError::InvalidKeyLength { actual: key.len() })?;

    let len = buf.len();
    cipher
        .encrypt_padded_mut::<NoPadding>(buf, len)
        .map_err(|_| CryptoError::MisalignedInput { len, block_len: BLOCK_LEN })?;

    Ok(())
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let cipher = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CryptoError::InvalidKeyLength { actual: key.len() })?;

    let len = buf.len();
    cipher
        .decrypt_padded_mut::<NoPadding>(buf)
        .map_err(|_| CryptoError::MisalignedInput { len, block_len: BLOCK_LEN })?;

    Ok(())
}
