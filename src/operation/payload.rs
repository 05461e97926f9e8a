//! Signed operation payload.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::crypto::Signature;

/// A forged operation together with its signature, ready for preapply/injection.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedOperationPayload {
    forged_operation: String,
    signature: Signature,
    signed_bytes_hex: String,
    operation: Map<String, Value>,
}

impl SignedOperationPayload {
    pub fn new(forged_operation: impl Into<String>, signature: Signature) -> Self {
        let forged_operation = forged_operation.into();
        let signed_bytes_hex = format!("{}{}", forged_operation, signature.to_hex());
        Self {
            forged_operation,
            signature,
            signed_bytes_hex,
            operation: Map::new(),
        }
    }

    /// Attach the unsigned operation fields (`branch`, `contents`, ...).
    ///
    /// A `signature` field in `operation` is ignored; the payload's own
    /// signature always wins.
    pub fn with_operation(mut self, operation: Map<String, Value>) -> Self {
        self.operation = operation;
        self
    }

    pub fn forged_operation(&self) -> &str {
        &self.forged_operation
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Forged hex followed by the raw signature hex; this is what gets injected.
    pub fn signed_bytes_hex(&self) -> &str {
        &self.signed_bytes_hex
    }

    /// Flattened view: operation fields plus `"signature"` in base58-check.
    pub fn dictionary_representation(&self) -> Map<String, Value> {
        let mut dictionary = self.operation.clone();
        dictionary.insert(
            "signature".to_string(),
            Value::String(self.signature.base58_check_representation()),
        );
        dictionary
    }
}

impl Serialize for SignedOperationPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.dictionary_representation().serialize(serializer)
    }
}
