//! Fuzz target for Encoder::encode → Decoder::decode
//!
//! Every UTF-8 payload without a legacy suffix must come back unchanged under
//! any valid key pair.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sigil_core::{Decoder, Encoder, ErrorKind};

#[derive(Debug, Arbitrary)]
struct Input {
    payload: String,
    key_size: u8,
    key_seed: [u8; 32],
    signing_key: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let key_len = [16, 24, 32][usize::from(input.key_size % 3)];
    let encryption_key = &input.key_seed[..key_len];

    let blob = match Encoder::new().encode(input.payload.as_bytes(), encryption_key, &input.signing_key) {
        Ok(blob) => blob,
        Err(err) => {
            assert!(input.signing_key.is_empty());
            assert_eq!(err.kind(), ErrorKind::Key);
            return;
        },
    };

    let decoded = Decoder::new().decode(&blob, encryption_key, &input.signing_key);

    if input.payload.ends_with("=0") || input.payload.ends_with("=equest") {
        assert!(decoded.is_err());
    } else {
        assert_eq!(decoded.ok().as_deref(), Some(input.payload.as_bytes()));
    }
});
