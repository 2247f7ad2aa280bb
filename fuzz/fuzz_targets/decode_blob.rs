//! Fuzz target for Decoder::decode
//!
//! Drives the full decode pipeline with attacker-chosen blobs and keys:
//! - Blobs of any length, including misaligned and sub-block inputs
//! - Keys of every length, valid or not
//! - Both padding modes
//!
//! The decoder should NEVER panic. Without the signing key's HMAC no blob
//! can verify, so success is also a bug.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sigil_core::{Decoder, DecoderConfig};

#[derive(Debug, Arbitrary)]
struct Input {
    blob: Vec<u8>,
    encryption_key: Vec<u8>,
    strict: bool,
}

const SIGNING_KEY: &[u8] = b"fuzz-signing-key";

fuzz_target!(|input: Input| {
    let config = if input.strict { DecoderConfig::strict() } else { DecoderConfig::default() };
    let result = Decoder::with_config(config).decode(&input.blob, &input.encryption_key, SIGNING_KEY);

    assert!(result.is_err(), "forged blob accepted");
});
