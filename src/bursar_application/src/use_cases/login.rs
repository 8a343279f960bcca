use bursar_core::{
    CredentialHasher, Email, Mailer, MerchantStore, MerchantStoreError, Password, SafeMerchant,
    TokenError, TokenIssuer, TokenPurpose,
};

use crate::{config::FlowConfig, notifications};

/// A successful login or password reset: the safe merchant projection plus a
/// session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedMerchant {
    pub merchant: SafeMerchant,
    pub access_token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Covers both an unknown email and a wrong password, so a caller cannot
    /// probe which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredential,
    /// The account exists but has not completed verification; a fresh
    /// verification email is sent before this is returned.
    #[error("Account is not verified")]
    NotVerified,
    #[error("Account is disabled")]
    AccountDisabled,
    #[error("Merchant store error: {0}")]
    MerchantStoreError(#[from] MerchantStoreError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

/// Merchant login: lookup, verification gate, active gate, password check,
/// session token issuance, in that order.
pub struct LoginUseCase<'a, M, H, T, E>
where
    M: MerchantStore,
    H: CredentialHasher,
    T: TokenIssuer,
    E: Mailer,
{
    merchant_store: &'a M,
    credential_hasher: &'a H,
    token_issuer: &'a T,
    mailer: &'a E,
    config: &'a FlowConfig,
}

impl<'a, M, H, T, E> LoginUseCase<'a, M, H, T, E>
where
    M: MerchantStore,
    H: CredentialHasher,
    T: TokenIssuer,
    E: Mailer,
{
    pub fn new(
        merchant_store: &'a M,
        credential_hasher: &'a H,
        token_issuer: &'a T,
        mailer: &'a E,
        config: &'a FlowConfig,
    ) -> Self {
        Self {
            merchant_store,
            credential_hasher,
            token_issuer,
            mailer,
            config,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AuthenticatedMerchant, LoginError> {
        let merchant = self
            .merchant_store
            .find_by_email(&email)
            .await?
            .ok_or(LoginError::InvalidCredential)?;

        // The verification gate comes before the password check, so this
        // outcome reveals nothing about whether the password was correct.
        if !merchant.account_is_verified {
            notifications::dispatch_merchant_verification(
                self.token_issuer,
                self.mailer,
                &self.config.frontend_base_url,
                &merchant,
            )
            .await;
            return Err(LoginError::NotVerified);
        }

        if !merchant.is_active {
            return Err(LoginError::AccountDisabled);
        }

        if !self
            .credential_hasher
            .verify(&password, &merchant.password_digest)
            .await
        {
            return Err(LoginError::InvalidCredential);
        }

        let access_token = self
            .token_issuer
            .issue(merchant.id.as_uuid(), TokenPurpose::LoginSession)?;

        Ok(AuthenticatedMerchant {
            merchant: SafeMerchant::from(&merchant),
            access_token,
        })
    }
}
