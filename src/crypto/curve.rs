//! Signing curves.

use serde::{Deserialize, Serialize};

/// Elliptic-curve family a key or signature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningCurve {
    Ed25519,
    Secp256k1,
}

impl SigningCurve {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
        }
    }

    /// Raw public key length (secp256k1 keys are SEC1-compressed).
    pub fn public_key_len(&self) -> usize {
        match self {
            Self::Ed25519 => 32,
            Self::Secp256k1 => 33,
        }
    }

    /// Raw signature length.
    pub fn signature_len(&self) -> usize {
        64
    }
}

impl std::fmt::Display for SigningCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
