//! Secret keys.
//!
//! A secret key is derived from a BIP-39 mnemonic or decoded from its
//! base58-check text. Malformed input yields `None`; nothing is repaired or
//! guessed.

use bip39::{Language, Mnemonic, Seed};
use ed25519_dalek::Signer as _;
use k256::ecdsa::signature::hazmat::PrehashSigner;
use zeroize::Zeroizing;

use crate::crypto::base58check;
use crate::crypto::curve::SigningCurve;
use crate::crypto::prefix::{self, Artifact};
use crate::crypto::public_key::PublicKey;
use crate::crypto::signature::Signature;
use crate::crypto::message_digest;

#[derive(Clone)]
enum KeyMaterial {
    Ed25519(ed25519_dalek::SigningKey),
    Secp256k1(k256::ecdsa::SigningKey),
}

/// A curve-tagged secret key. Key bytes never appear in `Debug` output.
#[derive(Clone)]
pub struct SecretKey {
    material: KeyMaterial,
}

impl SecretKey {
    /// Derive from a mnemonic with an empty passphrase.
    pub fn from_mnemonic(mnemonic: &str, curve: SigningCurve) -> Option<Self> {
        Self::from_mnemonic_with_passphrase(mnemonic, "", curve)
    }

    /// Derive from a mnemonic and passphrase.
    ///
    /// Fails when the mnemonic has a bad word count, unknown words or a bad
    /// checksum.
    pub fn from_mnemonic_with_passphrase(
        mnemonic: &str,
        passphrase: &str,
        curve: SigningCurve,
    ) -> Option<Self> {
        let mnemonic = Mnemonic::from_phrase(mnemonic, Language::English).ok()?;
        let seed = Seed::new(&mnemonic, passphrase);
        Self::from_seed(seed.as_bytes(), curve)
    }

    /// Derive from a BIP-39 seed. Only the first 32 bytes are used.
    ///
    /// ed25519 uses them as the key seed. secp256k1 uses them as the scalar,
    /// which must be non-zero and below the group order.
    pub fn from_seed(seed: &[u8], curve: SigningCurve) -> Option<Self> {
        let head: [u8; 32] = seed.get(..32)?.try_into().ok()?;
        let head = Zeroizing::new(head);
        let material = match curve {
            SigningCurve::Ed25519 => {
                KeyMaterial::Ed25519(ed25519_dalek::SigningKey::from_bytes(&head))
            }
            SigningCurve::Secp256k1 => {
                KeyMaterial::Secp256k1(k256::ecdsa::SigningKey::from_slice(&head[..]).ok()?)
            }
        };
        Some(Self { material })
    }

    /// Decode `edsk…` / `spsk…` text for the expected curve.
    ///
    /// ed25519 accepts both the 64-byte (seed ‖ public key) and the 32-byte
    /// seed encodings. In the 64-byte form the embedded public key must match.
    pub fn from_base58(text: &str, curve: SigningCurve) -> Option<Self> {
        let (prefix, payload) = base58check::decode_any(text)?;
        if prefix.curve != curve {
            return None;
        }
        let payload = Zeroizing::new(payload);

        match (curve, prefix.artifact) {
            (SigningCurve::Ed25519, Artifact::Seed) => Self::from_seed(&payload, curve),
            (SigningCurve::Ed25519, Artifact::SecretKey) => {
                let key = Self::from_seed(&payload[..32], curve)?;
                if key.public_key_bytes() != payload[32..] {
                    return None;
                }
                Some(key)
            }
            (SigningCurve::Secp256k1, Artifact::SecretKey) => Self::from_seed(&payload, curve),
            _ => None,
        }
    }

    pub fn curve(&self) -> SigningCurve {
        match self.material {
            KeyMaterial::Ed25519(_) => SigningCurve::Ed25519,
            KeyMaterial::Secp256k1(_) => SigningCurve::Secp256k1,
        }
    }

    /// The matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(self)
    }

    /// Raw public key bytes (32-byte ed25519 point or 33-byte compressed SEC1).
    pub(crate) fn public_key_bytes(&self) -> Vec<u8> {
        match &self.material {
            KeyMaterial::Ed25519(key) => key.verifying_key().to_bytes().to_vec(),
            KeyMaterial::Secp256k1(key) => key
                .verifying_key()
                .to_encoded_point(true)
                .as_bytes()
                .to_vec(),
        }
    }

    /// `edsk…` (64-byte form) or `spsk…` text.
    pub fn base58_check_representation(&self) -> String {
        let payload = match &self.material {
            KeyMaterial::Ed25519(key) => {
                let mut bytes = Zeroizing::new(key.to_bytes().to_vec());
                bytes.extend_from_slice(&self.public_key_bytes());
                bytes
            }
            KeyMaterial::Secp256k1(key) => Zeroizing::new(key.to_bytes().to_vec()),
        };
        match prefix::lookup(self.curve(), Artifact::SecretKey) {
            Some(p) => base58check::encode(p, &payload),
            None => String::new(),
        }
    }

    /// Sign `blake2b-256(message)`.
    pub fn sign(&self, message: &[u8]) -> Option<Signature> {
        let digest = message_digest(message);
        match &self.material {
            KeyMaterial::Ed25519(key) => {
                let signature = key.sign(&digest);
                Some(Signature::new(signature.to_bytes().to_vec(), SigningCurve::Ed25519))
            }
            KeyMaterial::Secp256k1(key) => {
                let signature: k256::ecdsa::Signature = key.sign_prehash(&digest).ok()?;
                let signature = signature.normalize_s().unwrap_or(signature);
                Some(Signature::new(signature.to_bytes().to_vec(), SigningCurve::Secp256k1))
            }
        }
    }

    /// Sign hex-encoded bytes. `None` if `hex` is not valid hex.
    pub fn sign_hex(&self, hex: &str) -> Option<Signature> {
        let bytes = hex::decode(hex).ok()?;
        self.sign(&bytes)
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("curve", &self.curve())
            .finish_non_exhaustive()
    }
}
