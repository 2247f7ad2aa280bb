//! Property-based tests for padding and the CBC transport

use proptest::prelude::*;
use sigil_crypto::{BLOCK_LEN, IV_LEN, PaddingMode, decrypt, encrypt_with_iv, pad, unpad_strict};

fn aes_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![Just(16usize), Just(24), Just(32)]
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

/// Property: Padding always adds between 1 and BLOCK_LEN bytes and lands on
/// a block boundary
#[test]
fn prop_pad_length() {
    proptest!(|(data in prop::collection::vec(any::<u8>(), 0..200))| {
        let mut padded = data.clone();
        pad(&mut padded, BLOCK_LEN);

        let added = padded.len() - data.len();
        prop_assert!((1..=BLOCK_LEN).contains(&added));
        prop_assert_eq!(padded.len() % BLOCK_LEN, 0);
        prop_assert!(padded[data.len()..].iter().all(|&b| usize::from(b) == added));
    });
}

/// Property: Both unpadding modes undo padding exactly
#[test]
fn prop_unpad_inverts_pad() {
    proptest!(|(data in prop::collection::vec(any::<u8>(), 0..200))| {
        let mut padded = data.clone();
        pad(&mut padded, BLOCK_LEN);

        for mode in [PaddingMode::Lenient, PaddingMode::Strict] {
            prop_assert_eq!(mode.unpad(&padded, BLOCK_LEN)?, &data[..]);
        }
    });
}

/// Property: Strict unpadding accepts nothing that lenient unpadding rejects
#[test]
fn prop_strict_is_stricter() {
    proptest!(|(data in prop::collection::vec(any::<u8>(), 0..64))| {
        if let Ok(body) = unpad_strict(&data, BLOCK_LEN) {
            prop_assert_eq!(PaddingMode::Lenient.unpad(&data, BLOCK_LEN)?, body);
        }
    });
}

/// Property: Decryption under the same key and IV restores the plaintext
#[test]
fn prop_decrypt_inverts_encrypt() {
    proptest!(|(
        blocks in prop::collection::vec(any::<[u8; BLOCK_LEN]>(), 1..8),
        key in aes_key(),
        iv in any::<[u8; IV_LEN]>(),
    )| {
        let plaintext = blocks.concat();
        let blob = encrypt_with_iv(&plaintext, &key, &iv)?;

        prop_assert_eq!(&blob[..IV_LEN], &iv[..]);
        prop_assert_eq!(&decrypt(&blob, &key)?[..], &plaintext[..]);
    });
}

/// Property: The same plaintext under different IVs gives different
/// ciphertext
#[test]
fn prop_iv_changes_ciphertext() {
    proptest!(|(
        block in any::<[u8; BLOCK_LEN]>(),
        key in aes_key(),
        iv_a in any::<[u8; IV_LEN]>(),
        iv_b in any::<[u8; IV_LEN]>(),
    )| {
        prop_assume!(iv_a != iv_b);

        let a = encrypt_with_iv(&block, &key, &iv_a)?;
        let b = encrypt_with_iv(&block, &key, &iv_b)?;

        prop_assert_ne!(&a[IV_LEN..], &b[IV_LEN..]);
    });
}
