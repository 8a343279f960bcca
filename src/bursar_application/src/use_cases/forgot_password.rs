use bursar_core::{
    Email, Mailer, MerchantStore, MerchantStoreError, TokenError, TokenIssuer, TokenPurpose,
};

use crate::{config::FlowConfig, notifications};

#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("Merchant not found")]
    NotFound,
    #[error("Account is not verified")]
    NotVerified,
    #[error("Account is disabled")]
    AccountDisabled,
    #[error("Merchant store error: {0}")]
    MerchantStoreError(#[from] MerchantStoreError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

/// Starts password recovery: issues a time-boxed recovery token and mails
/// the recovery link. Only verified, active accounts qualify.
pub struct InitiateForgotPasswordUseCase<'a, M, T, E>
where
    M: MerchantStore,
    T: TokenIssuer,
    E: Mailer,
{
    merchant_store: &'a M,
    token_issuer: &'a T,
    mailer: &'a E,
    config: &'a FlowConfig,
}

impl<'a, M, T, E> InitiateForgotPasswordUseCase<'a, M, T, E>
where
    M: MerchantStore,
    T: TokenIssuer,
    E: Mailer,
{
    pub fn new(
        merchant_store: &'a M,
        token_issuer: &'a T,
        mailer: &'a E,
        config: &'a FlowConfig,
    ) -> Self {
        Self {
            merchant_store,
            token_issuer,
            mailer,
            config,
        }
    }

    #[tracing::instrument(name = "InitiateForgotPasswordUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), ForgotPasswordError> {
        let merchant = self
            .merchant_store
            .find_by_email(&email)
            .await?
            .ok_or(ForgotPasswordError::NotFound)?;

        if !merchant.account_is_verified {
            return Err(ForgotPasswordError::NotVerified);
        }

        if !merchant.is_active {
            return Err(ForgotPasswordError::AccountDisabled);
        }

        let token = self
            .token_issuer
            .issue(merchant.id.as_uuid(), TokenPurpose::ForgotPassword)?;

        notifications::dispatch_password_recovery(
            self.mailer,
            &self.config.frontend_base_url,
            &merchant,
            &token,
        )
        .await;

        Ok(())
    }
}
