use bursar_core::{MerchantId, MerchantStore, MerchantStoreError, SafeMerchant};

#[derive(Debug, thiserror::Error)]
pub enum CompleteVerificationError {
    #[error("Merchant not found")]
    NotFound,
    #[error("Merchant store error: {0}")]
    MerchantStoreError(#[from] MerchantStoreError),
}

/// Flips `account_is_verified` for the merchant. Deliberately not guarded
/// against re-invocation; a second call re-sets the same flag.
pub struct CompleteVerificationUseCase<'a, M>
where
    M: MerchantStore,
{
    merchant_store: &'a M,
}

impl<'a, M> CompleteVerificationUseCase<'a, M>
where
    M: MerchantStore,
{
    pub fn new(merchant_store: &'a M) -> Self {
        Self { merchant_store }
    }

    #[tracing::instrument(name = "CompleteVerificationUseCase::execute", skip(self))]
    pub async fn execute(&self, id: MerchantId) -> Result<SafeMerchant, CompleteVerificationError> {
        let merchant = self
            .merchant_store
            .mark_verified(id)
            .await
            .map_err(|e| match e {
                MerchantStoreError::MerchantNotFound => CompleteVerificationError::NotFound,
                other => CompleteVerificationError::MerchantStoreError(other),
            })?;

        Ok(SafeMerchant::from(&merchant))
    }
}
