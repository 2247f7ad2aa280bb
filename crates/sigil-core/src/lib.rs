//! Sigil Message Codec
//!
//! Turns a payload into a signed, encrypted blob and back.
//!
//! # Pipeline
//!
//! ```text
//! encode:
//!   payload ──sign──► Envelope ──JSON + 0x00──► pad ──AES-CBC──► IV || ciphertext
//!
//! decode:
//!   IV || ciphertext ──AES-CBC──► unpad ──strip 0x00, JSON──► Envelope
//!                                                               │
//!                                              legacy suffix repair on data
//!                                                               │
//!                                                      verify signature ──► payload
//! ```
//!
//! [`Encoder`] and [`Decoder`] are plain values. They hold no keys and no
//! shared state, so one instance can serve any number of threads. Keys are
//! passed to every call and dropped when it returns.
//!
//! [`host::HelperModule`] wraps both for hosts that work in hex text and
//! expect an empty result instead of an error.
//!
//! # Compatibility
//!
//! Decoding rewrites payloads that end in `=0` (the final `0` removed)
//! or `=equest` (`equest` removed) before verifying, to accept blobs from
//! older producers. A payload legitimately ending in either suffix will
//! therefore not survive a round trip.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod host;

pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{CodecError, ErrorKind};
pub use host::{HelperModule, HostError, hex_decode, hex_encode};
pub use sigil_crypto::{EntropySource, OsEntropy, PaddingMode};
