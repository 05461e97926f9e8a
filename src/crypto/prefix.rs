//! Base58-check prefix table.
//!
//! Every encoded artifact starts with a fixed byte prefix chosen so that the
//! base58 text begins with a recognizable tag (`edpk`, `tz1`, `sppk`, ...).
//! Prefixes are looked up by `(curve, artifact)`; decoded bytes are identified
//! by the longest prefix whose expected total length also matches.

use crate::crypto::curve::SigningCurve;

/// Kind of encoded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    PublicKey,
    SecretKey,
    /// 32-byte ed25519 seed form of a secret key.
    Seed,
    PublicKeyHash,
    Signature,
}

/// One row of the prefix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    pub curve: SigningCurve,
    pub artifact: Artifact,
    pub bytes: &'static [u8],
    /// Payload length in bytes, excluding prefix and checksum.
    pub payload_len: usize,
}

impl Prefix {
    /// Whether `decoded` (checksum already stripped) carries this prefix and
    /// exactly the expected payload length.
    pub fn matches(&self, decoded: &[u8]) -> bool {
        decoded.len() == self.bytes.len() + self.payload_len && decoded.starts_with(self.bytes)
    }
}

const fn row(
    curve: SigningCurve,
    artifact: Artifact,
    bytes: &'static [u8],
    payload_len: usize,
) -> Prefix {
    Prefix {
        curve,
        artifact,
        bytes,
        payload_len,
    }
}

pub const PREFIXES: &[Prefix] = &[
    // edpk
    row(SigningCurve::Ed25519, Artifact::PublicKey, &[13, 15, 37, 217], 32),
    // edsk (seed ‖ public key)
    row(SigningCurve::Ed25519, Artifact::SecretKey, &[43, 246, 78, 7], 64),
    // edsk (seed only)
    row(SigningCurve::Ed25519, Artifact::Seed, &[13, 15, 58, 7], 32),
    // tz1
    row(SigningCurve::Ed25519, Artifact::PublicKeyHash, &[6, 161, 159], 20),
    // edsig
    row(SigningCurve::Ed25519, Artifact::Signature, &[9, 245, 205, 134, 18], 64),
    // sppk
    row(SigningCurve::Secp256k1, Artifact::PublicKey, &[3, 254, 226, 86], 33),
    // spsk
    row(SigningCurve::Secp256k1, Artifact::SecretKey, &[17, 162, 224, 201], 32),
    // tz2
    row(SigningCurve::Secp256k1, Artifact::PublicKeyHash, &[6, 161, 161], 20),
    // spsig1
    row(SigningCurve::Secp256k1, Artifact::Signature, &[13, 115, 101, 19, 63], 64),
];

/// Table entry for `(curve, artifact)`, if that pairing exists.
pub fn lookup(curve: SigningCurve, artifact: Artifact) -> Option<&'static Prefix> {
    PREFIXES
        .iter()
        .find(|p| p.curve == curve && p.artifact == artifact)
}

/// Identify decoded bytes by longest matching prefix.
pub fn identify(decoded: &[u8]) -> Option<&'static Prefix> {
    PREFIXES
        .iter()
        .filter(|p| p.matches(decoded))
        .max_by_key(|p| p.bytes.len())
}
