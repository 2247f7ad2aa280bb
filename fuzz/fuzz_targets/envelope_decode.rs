//! Fuzz target for Envelope::decode
//!
//! Feeds arbitrary plaintext straight to the envelope parser, as a decrypted
//! blob under a wrong key would. The parser should NEVER panic, and anything
//! it accepts must survive a re-encode.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sigil_proto::Envelope;

fuzz_target!(|data: &[u8]| {
    let Ok(envelope) = Envelope::decode(data) else {
        return;
    };

    let mut encoded = Vec::new();
    assert!(envelope.encode(&mut encoded).is_ok());

    // Repair already ran once, so a second decode must not change data
    let reparsed = Envelope::decode(&encoded);
    assert_eq!(reparsed.as_ref().map(|e| &e.data), Ok(&envelope.data));
});
