//! Public keys: derivation, base58-check text, hashes, verification.

use ed25519_dalek::Verifier as _;
use k256::ecdsa::signature::hazmat::PrehashVerifier;

use crate::crypto::base58check;
use crate::crypto::curve::SigningCurve;
use crate::crypto::prefix::{self, Artifact};
use crate::crypto::secret_key::SecretKey;
use crate::crypto::signature::Signature;
use crate::crypto::{message_digest, short_hash};

/// A curve-tagged public key. Equal iff curve and raw bytes are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: Vec<u8>,
    curve: SigningCurve,
}

impl PublicKey {
    /// Derive from a secret key. Infallible for a valid secret key.
    pub fn from_secret_key(secret_key: &SecretKey) -> Self {
        Self {
            bytes: secret_key.public_key_bytes(),
            curve: secret_key.curve(),
        }
    }

    /// Decode `edpk…` / `sppk…` text for the expected curve.
    ///
    /// Rejects bad checksums, foreign prefixes, wrong lengths and bytes that
    /// are not a point on the curve.
    pub fn from_base58(text: &str, curve: SigningCurve) -> Option<Self> {
        let prefix = prefix::lookup(curve, Artifact::PublicKey)?;
        let bytes = base58check::decode(text, prefix)?;
        Self::from_bytes(bytes, curve)
    }

    /// Wrap raw public key bytes after validating them for `curve`.
    pub fn from_bytes(bytes: Vec<u8>, curve: SigningCurve) -> Option<Self> {
        if bytes.len() != curve.public_key_len() {
            return None;
        }
        let valid = match curve {
            SigningCurve::Ed25519 => ed25519_verifying_key(&bytes).is_some(),
            SigningCurve::Secp256k1 => k256::ecdsa::VerifyingKey::from_sec1_bytes(&bytes).is_ok(),
        };
        valid.then_some(Self { bytes, curve })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn curve(&self) -> SigningCurve {
        self.curve
    }

    pub fn base58_check_representation(&self) -> String {
        encode(self.curve, Artifact::PublicKey, &self.bytes)
    }

    /// `tz1…` / `tz2…` address of this key.
    pub fn public_key_hash(&self) -> String {
        encode(self.curve, Artifact::PublicKeyHash, &short_hash(&self.bytes))
    }

    /// Check `signature` over `blake2b-256(message)`.
    ///
    /// Returns `false` for a signature from another curve, malformed signature
    /// bytes, or a genuine mismatch.
    pub fn verify(&self, signature: &Signature, message: &[u8]) -> bool {
        if signature.curve() != self.curve
            || signature.as_bytes().len() != self.curve.signature_len()
        {
            return false;
        }
        let digest = message_digest(message);
        match self.curve {
            SigningCurve::Ed25519 => {
                let Some(key) = ed25519_verifying_key(&self.bytes) else {
                    return false;
                };
                let Ok(sig) = ed25519_dalek::Signature::from_slice(signature.as_bytes()) else {
                    return false;
                };
                key.verify(&digest, &sig).is_ok()
            }
            SigningCurve::Secp256k1 => {
                let Ok(key) = k256::ecdsa::VerifyingKey::from_sec1_bytes(&self.bytes) else {
                    return false;
                };
                let Ok(sig) = k256::ecdsa::Signature::from_slice(signature.as_bytes()) else {
                    return false;
                };
                key.verify_prehash(&digest, &sig).is_ok()
            }
        }
    }

    /// `verify` over hex-encoded bytes; `false` on malformed hex.
    pub fn verify_hex(&self, signature: &Signature, hex: &str) -> bool {
        match hex::decode(hex) {
            Ok(bytes) => self.verify(signature, &bytes),
            Err(_) => false,
        }
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base58_check_representation())
    }
}

fn ed25519_verifying_key(bytes: &[u8]) -> Option<ed25519_dalek::VerifyingKey> {
    let bytes: &[u8; 32] = bytes.try_into().ok()?;
    ed25519_dalek::VerifyingKey::from_bytes(bytes).ok()
}

fn encode(curve: SigningCurve, artifact: Artifact, payload: &[u8]) -> String {
    match prefix::lookup(curve, artifact) {
        Some(p) => base58check::encode(p, payload),
        None => String::new(),
    }
}
