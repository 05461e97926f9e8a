//! Signing capability.
//!
//! Code that builds signed payloads only sees [`Signer`]; whether key material
//! lives in memory ([`crate::wallet::Wallet`]), in an enclave or behind a remote
//! device ([`RemoteSigner`]) is invisible to it.

use crate::crypto::{PublicKey, Signature};

/// Something that can sign bytes and tell you which key it signs with.
pub trait Signer: Send + Sync {
    /// Sign `bytes`. `None` if the signer declines or fails.
    fn sign(&self, bytes: &[u8]) -> Option<Signature>;

    /// The public key matching the signatures this signer produces.
    fn public_key(&self) -> &PublicKey;
}

impl<S: Signer + ?Sized> Signer for &S {
    fn sign(&self, bytes: &[u8]) -> Option<Signature> {
        (**self).sign(bytes)
    }

    fn public_key(&self) -> &PublicKey {
        (**self).public_key()
    }
}

impl<S: Signer + ?Sized> Signer for Box<S> {
    fn sign(&self, bytes: &[u8]) -> Option<Signature> {
        (**self).sign(bytes)
    }

    fn public_key(&self) -> &PublicKey {
        (**self).public_key()
    }
}

/// Stateless entry point that forwards to a [`Signer`].
pub struct SigningService;

impl SigningService {
    pub fn sign(bytes: &[u8], signer: &dyn Signer) -> Option<Signature> {
        signer.sign(bytes)
    }

    /// Decode `hex` and sign the bytes. `None` on malformed hex.
    pub fn sign_hex(hex: &str, signer: &dyn Signer) -> Option<Signature> {
        let bytes = hex::decode(hex).ok()?;
        Self::sign(&bytes, signer)
    }
}

type SignFn = dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync;

/// A signer whose key material is held elsewhere.
///
/// The callback receives the message bytes and returns raw signature bytes
/// for the known public key; they are tagged with that key's curve.
pub struct RemoteSigner {
    public_key: PublicKey,
    sign_fn: Box<SignFn>,
}

impl RemoteSigner {
    pub fn new<F>(public_key: PublicKey, sign_fn: F) -> Self
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        Self {
            public_key,
            sign_fn: Box::new(sign_fn),
        }
    }
}

impl Signer for RemoteSigner {
    fn sign(&self, bytes: &[u8]) -> Option<Signature> {
        let raw = (self.sign_fn)(bytes)?;
        Some(Signature::new(raw, self.public_key.curve()))
    }

    fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl std::fmt::Debug for RemoteSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSigner")
            .field("public_key", &self.public_key.base58_check_representation())
            .finish_non_exhaustive()
    }
}
