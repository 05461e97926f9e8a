//! Multi-curve key identity: secret/public keys, signatures, base58-check text.
//!
//! Signing always happens over `blake2b-256(message)`; public key hashes are
//! `blake2b-160(raw public key)`.

pub mod base58check;
pub mod curve;
pub mod prefix;
pub mod public_key;
pub mod secret_key;
pub mod signature;

pub use curve::SigningCurve;
pub use prefix::Artifact;
pub use public_key::PublicKey;
pub use secret_key::SecretKey;
pub use signature::Signature;

use blake2::digest::consts::{U20, U32};
use blake2::{Blake2b, Digest};

/// Digest that is actually signed for a message.
pub fn message_digest(message: &[u8]) -> [u8; 32] {
    Blake2b::<U32>::digest(message).into()
}

/// 20-byte identifier hash used for public key hashes.
pub fn short_hash(bytes: &[u8]) -> [u8; 20] {
    Blake2b::<U20>::digest(bytes).into()
}
