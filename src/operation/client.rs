//! Operations sub-client — forge, sign, preapply, inject.

use serde_json::{json, Value};

use crate::client::TezosClient;
use crate::error::SdkError;
use crate::operation::{self, preapply, SignedOperationPayload};
use crate::rpc::endpoints::{self, BlockHeader};
use crate::signer::Signer;

/// Sub-client for operation injection.
pub struct Operations<'a> {
    pub(crate) client: &'a TezosClient,
}

impl<'a> Operations<'a> {
    /// Forge `{branch, contents}` against `header`, returning forged hex.
    pub async fn forge(
        &self,
        header: &BlockHeader,
        contents: Vec<Value>,
    ) -> Result<String, SdkError> {
        let unsigned = operation::unsigned_operation(&header.hash, contents);
        let payload = serde_json::to_string(&unsigned)?;
        self.client
            .send(&endpoints::forge_operation(&header.chain_id, &header.hash, &payload))
            .await
    }

    /// Simulate a signed operation and fail unless every content applied.
    pub async fn preapply(
        &self,
        header: &BlockHeader,
        signed: &SignedOperationPayload,
    ) -> Result<Value, SdkError> {
        let mut entry = signed.dictionary_representation();
        entry.insert("protocol".to_string(), json!(header.protocol));
        let payload = Value::Array(vec![Value::Object(entry)]).to_string();

        let result = self
            .client
            .send(&endpoints::preapply_operation(&header.chain_id, &header.hash, &payload))
            .await?;
        preapply::check(&result)?;
        Ok(result)
    }

    /// Inject signed bytes. Returns the operation hash.
    pub async fn inject(&self, signed: &SignedOperationPayload) -> Result<String, SdkError> {
        self.client
            .send(&endpoints::inject_operation(signed.signed_bytes_hex()))
            .await
    }

    /// The full flow: header, forge, sign, preapply, inject.
    pub async fn forge_sign_preapply_inject(
        &self,
        contents: Vec<Value>,
        signer: &dyn Signer,
    ) -> Result<String, SdkError> {
        let header = self.client.block_header().await?;
        tracing::debug!(branch = %header.hash, level = header.level, "Forging operation");

        let forged = self.forge(&header, contents.clone()).await?;
        let signed = operation::sign_forged(&forged, signer)?
            .with_operation(operation::unsigned_operation(&header.hash, contents));

        self.preapply(&header, &signed).await?;
        let hash = self.inject(&signed).await?;
        tracing::debug!(operation = %hash, "Injected operation");
        Ok(hash)
    }
}
