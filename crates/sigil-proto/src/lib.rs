//! Sigil envelope format.
//!
//! The envelope is the signed, text-serialized form of a payload that sits
//! between the signer and the block cipher. This crate knows nothing about
//! encryption; it turns a payload into terminator-ended JSON and back.
//!
//! # Invariants
//!
//! - Serialization always ends with exactly one terminator byte
//! - Parsing strips every trailing terminator byte before reading JSON
//! - The legacy suffix repair runs after parsing and before any signature
//!   check (see [`legacy`])

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod envelope;
pub mod error;
pub mod legacy;

pub use envelope::{Envelope, TERMINATOR};
pub use error::EnvelopeError;
pub use legacy::{LegacyRepair, repair_data_suffix};
