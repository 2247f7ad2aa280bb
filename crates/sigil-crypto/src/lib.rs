//! Sigil Cryptographic Primitives
//!
//! Building blocks for the Sigil envelope: PKCS7-style padding, HMAC-SHA256
//! signatures, and AES-CBC transport with a random per-message IV. Every
//! function takes its keys as arguments and keeps nothing between calls.
//!
//! # Layering
//!
//! ```text
//! serialized envelope || 0x00
//!        │
//!        ▼
//! padding::pad → block-aligned plaintext
//!        │
//!        ▼
//! cipher::encrypt (fresh IV from EntropySource) → IV || ciphertext
//! ```
//!
//! The signer runs before serialization and covers the payload text; see
//! `sigil-proto` for the envelope itself.
//!
//! # Security
//!
//! Confidentiality:
//! - AES-128/192/256 selected by key length, CBC mode
//! - IV drawn fresh from the OS RNG on every encryption, never reused
//!
//! Authenticity:
//! - HMAC-SHA256 over the payload, compared in constant time
//! - CBC is malleable on its own; callers MUST verify the signature before
//!   trusting any decrypted content
//!
//! Key handling:
//! - Keys are borrowed views ([`EncryptionKey`], [`SigningKey`]) that never
//!   outlive the call
//! - Decrypted buffers are zeroized on drop

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod entropy;
pub mod error;
pub mod padding;
pub mod signer;

pub use cipher::{BLOCK_LEN, EncryptionKey, IV_LEN, KeySize, decrypt, encrypt, encrypt_with_iv};
pub use entropy::{EntropySource, OsEntropy};
pub use error::CryptoError;
pub use padding::{PaddingMode, pad, unpad, unpad_strict};
pub use signer::{SIGNATURE_LEN, SigningKey, sign, verify};
