//! In-memory wallet — the default [`Signer`] implementation.
//!
//! Key material stays in process memory for the lifetime of the wallet.
//! Persisting it is the caller's business.

use bip39::{Language, Mnemonic, MnemonicType};
use zeroize::Zeroizing;

use crate::crypto::{PublicKey, SecretKey, Signature, SigningCurve};
use crate::signer::Signer;

/// A secret key, its public key and (optionally) the mnemonic it came from.
#[derive(Clone)]
pub struct Wallet {
    secret_key: SecretKey,
    public_key: PublicKey,
    mnemonic: Option<Zeroizing<String>>,
}

impl Wallet {
    /// Create a wallet from a fresh 12-word mnemonic.
    pub fn generate(curve: SigningCurve) -> Option<Self> {
        let mnemonic = Mnemonic::new(MnemonicType::Words12, Language::English);
        Self::from_mnemonic(mnemonic.phrase(), "", curve)
    }

    pub fn from_mnemonic(mnemonic: &str, passphrase: &str, curve: SigningCurve) -> Option<Self> {
        let secret_key = SecretKey::from_mnemonic_with_passphrase(mnemonic, passphrase, curve)?;
        let mut wallet = Self::from_key(secret_key);
        wallet.mnemonic = Some(Zeroizing::new(mnemonic.to_string()));
        Some(wallet)
    }

    /// Restore from `edsk…` / `spsk…` text.
    pub fn from_secret_key(text: &str, curve: SigningCurve) -> Option<Self> {
        SecretKey::from_base58(text, curve).map(Self::from_key)
    }

    pub fn from_key(secret_key: SecretKey) -> Self {
        let public_key = secret_key.public_key();
        Self {
            secret_key,
            public_key,
            mnemonic: None,
        }
    }

    /// The `tz1…` / `tz2…` address.
    pub fn address(&self) -> String {
        self.public_key.public_key_hash()
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref().map(String::as_str)
    }

    pub fn curve(&self) -> SigningCurve {
        self.secret_key.curve()
    }
}

impl Signer for Wallet {
    fn sign(&self, bytes: &[u8]) -> Option<Signature> {
        self.secret_key.sign(bytes)
    }

    fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("curve", &self.curve())
            .finish_non_exhaustive()
    }
}
