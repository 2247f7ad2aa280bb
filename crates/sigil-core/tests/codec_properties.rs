//! Property-based tests for the Sigil codec
//!
//! 1. **Round-trip**: decode(encode(m)) == m for every UTF-8 payload that does
//!    not end in a legacy suffix, under every key size
//! 2. **Tamper detection**: a single flipped bit never yields another payload
//! 3. **Key sensitivity**: a different signing key never verifies

use proptest::prelude::*;
use sigil_core::{Decoder, DecoderConfig, Encoder, ErrorKind};

const BLOCK_LEN: usize = 16;

fn has_legacy_suffix(payload: &str) -> bool {
    payload.ends_with("=0") || payload.ends_with("=equest")
}

fn encryption_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![Just(16usize), Just(24), Just(32)]
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

/// Non-empty, at most one HMAC block, and ending in a non-zero byte. HMAC
/// zero-extends short keys, so two such keys are equivalent only if equal.
fn signing_key() -> impl Strategy<Value = Vec<u8>> {
    (prop::collection::vec(any::<u8>(), 0..63), 1u8..=255).prop_map(|(mut key, last)| {
        key.push(last);
        key
    })
}

fn payload() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("legacy suffix", |p| !has_legacy_suffix(p))
}

/// Property: Decoding an encoded payload returns it unchanged
#[test]
fn prop_roundtrip() {
    proptest!(|(payload in payload(), enc_key in encryption_key(), sign_key in signing_key())| {
        let blob = Encoder::new().encode(payload.as_bytes(), &enc_key, &sign_key).unwrap();
        let decoded = Decoder::new().decode(&blob, &enc_key, &sign_key).unwrap();

        prop_assert_eq!(decoded, payload.into_bytes());
    });
}

/// Property: Strict padding accepts everything the encoder produces
#[test]
fn prop_strict_roundtrip() {
    proptest!(|(payload in payload(), enc_key in encryption_key(), sign_key in signing_key())| {
        let blob = Encoder::new().encode(payload.as_bytes(), &enc_key, &sign_key).unwrap();
        let decoded = Decoder::with_config(DecoderConfig::strict())
            .decode(&blob, &enc_key, &sign_key)
            .unwrap();

        prop_assert_eq!(decoded, payload.into_bytes());
    });
}

/// Property: Blobs are one IV plus at least one whole block beyond the
/// terminated envelope
#[test]
fn prop_blob_shape() {
    proptest!(|(payload in any::<String>(), enc_key in encryption_key())| {
        let blob = Encoder::new().encode(payload.as_bytes(), &enc_key, b"k").unwrap();

        prop_assert_eq!((blob.len() - BLOCK_LEN) % BLOCK_LEN, 0);
        prop_assert!(blob.len() > BLOCK_LEN + payload.len());
    });
}

/// Property: Flipping any single bit never yields a different payload, and
/// every failure is a padding, format, or signature failure
#[test]
fn prop_single_bit_tamper() {
    proptest!(|(
        payload in payload(),
        enc_key in encryption_key(),
        sign_key in signing_key(),
        bit in any::<prop::sample::Index>(),
    )| {
        let mut blob = Encoder::new().encode(payload.as_bytes(), &enc_key, &sign_key).unwrap();
        let bit = bit.index(blob.len() * 8);
        blob[bit / 8] ^= 1 << (bit % 8);

        match Decoder::new().decode(&blob, &enc_key, &sign_key) {
            // Lenient unpadding can discard a garbled final padding block
            Ok(decoded) => prop_assert_eq!(decoded, payload.into_bytes()),
            Err(err) => prop_assert!(
                matches!(err.kind(), ErrorKind::Padding | ErrorKind::EnvelopeFormat | ErrorKind::Signature),
                "unexpected kind {}", err.kind()
            ),
        }
    });
}

/// Property: Flipping a bit of the IV always fails
#[test]
fn prop_iv_tamper_always_fails() {
    proptest!(|(
        payload in payload(),
        enc_key in encryption_key(),
        sign_key in signing_key(),
        bit in 0usize..BLOCK_LEN * 8,
    )| {
        let mut blob = Encoder::new().encode(payload.as_bytes(), &enc_key, &sign_key).unwrap();
        blob[bit / 8] ^= 1 << (bit % 8);

        prop_assert!(Decoder::new().decode(&blob, &enc_key, &sign_key).is_err());
    });
}

/// Property: A different signing key always fails with a signature error
#[test]
fn prop_wrong_signing_key() {
    proptest!(|(
        payload in payload(),
        enc_key in encryption_key(),
        sign_key in signing_key(),
        other_key in signing_key(),
    )| {
        prop_assume!(sign_key != other_key);

        let blob = Encoder::new().encode(payload.as_bytes(), &enc_key, &sign_key).unwrap();
        let err = Decoder::new().decode(&blob, &enc_key, &other_key).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Signature);
    });
}

/// Property: Truncating a blob to one block or less always reports it as too
/// short, whatever the keys
#[test]
fn prop_short_blob() {
    proptest!(|(
        blob in prop::collection::vec(any::<u8>(), 0..=BLOCK_LEN),
        enc_key in prop::collection::vec(any::<u8>(), 0..40),
        sign_key in prop::collection::vec(any::<u8>(), 0..8),
    )| {
        let err = Decoder::new().decode(&blob, &enc_key, &sign_key).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InputTooShort);
    });
}
