//! Curve-tagged signatures.

use crate::crypto::base58check;
use crate::crypto::curve::SigningCurve;
use crate::crypto::prefix::{self, Artifact};

/// Raw signature bytes plus the curve of the key that produced them.
///
/// The bytes are not validated on construction; a malformed signature simply
/// fails verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    bytes: Vec<u8>,
    curve: SigningCurve,
}

impl Signature {
    pub fn new(bytes: impl Into<Vec<u8>>, curve: SigningCurve) -> Self {
        Self {
            bytes: bytes.into(),
            curve,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn curve(&self) -> SigningCurve {
        self.curve
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// `edsig…` / `spsig1…` text.
    pub fn base58_check_representation(&self) -> String {
        match prefix::lookup(self.curve, Artifact::Signature) {
            Some(p) => base58check::encode(p, &self.bytes),
            None => String::new(),
        }
    }

    /// Parse base58-check text, detecting the curve from its prefix.
    pub fn from_base58(text: &str) -> Option<Self> {
        let (prefix, payload) = base58check::decode_any(text)?;
        if prefix.artifact != Artifact::Signature {
            return None;
        }
        Some(Self::new(payload, prefix.curve))
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base58_check_representation())
    }
}
