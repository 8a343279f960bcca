use bursar_core::{
    CredentialHasher, MerchantId, MerchantStore, MerchantStoreError, Password, SafeMerchant,
    TokenError, TokenIssuer, TokenPurpose,
};

use crate::use_cases::login::AuthenticatedMerchant;

#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Merchant not found")]
    NotFound,
    #[error("Failed to hash password: {0}")]
    HashingError(String),
    #[error("Merchant store error: {0}")]
    MerchantStoreError(#[from] MerchantStoreError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

/// Replaces the merchant's password and hands back a fresh session token.
///
/// The merchant id is trusted as given; callers that hold a recovery token
/// instead should go through `AccountService::reset_password_with_token`,
/// which validates the token before delegating here.
pub struct ResetPasswordUseCase<'a, M, H, T>
where
    M: MerchantStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    merchant_store: &'a M,
    credential_hasher: &'a H,
    token_issuer: &'a T,
}

impl<'a, M, H, T> ResetPasswordUseCase<'a, M, H, T>
where
    M: MerchantStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(merchant_store: &'a M, credential_hasher: &'a H, token_issuer: &'a T) -> Self {
        Self {
            merchant_store,
            credential_hasher,
            token_issuer,
        }
    }

    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, new_password))]
    pub async fn execute(
        &self,
        id: MerchantId,
        new_password: Password,
    ) -> Result<AuthenticatedMerchant, ResetPasswordError> {
        let password_digest = self
            .credential_hasher
            .hash(&new_password)
            .await
            .map_err(ResetPasswordError::HashingError)?;

        let merchant = self
            .merchant_store
            .update_password(id, password_digest)
            .await
            .map_err(|e| match e {
                MerchantStoreError::MerchantNotFound => ResetPasswordError::NotFound,
                other => ResetPasswordError::MerchantStoreError(other),
            })?;

        let access_token = self
            .token_issuer
            .issue(merchant.id.as_uuid(), TokenPurpose::LoginSession)?;

        Ok(AuthenticatedMerchant {
            merchant: SafeMerchant::from(&merchant),
            access_token,
        })
    }
}
