use bursar_core::{
    CredentialHasher, Email, Mailer, MerchantStore, MerchantStoreError, NewMerchant, Password,
    Phone, SafeMerchant, TokenIssuer,
};

use crate::{config::FlowConfig, notifications};

/// Registration payload as received from the caller; the password is still
/// plaintext at this point.
#[derive(Debug)]
pub struct NewMerchantRequest {
    pub email: Email,
    pub phone: Phone,
    pub business_name: String,
    pub password: Password,
    pub base_currency: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterMerchantError {
    /// A verified merchant already holds this email or phone.
    #[error("Merchant already exists")]
    AlreadyExists,
    /// An unverified merchant already holds this email or phone; a fresh
    /// verification email was sent as a courtesy, but the registration
    /// itself fails.
    #[error("Merchant already exists but is not verified")]
    AlreadyExistsUnverified,
    #[error("Merchant store error: {0}")]
    MerchantStoreError(#[from] MerchantStoreError),
    #[error("Failed to hash password: {0}")]
    HashingError(String),
}

/// Merchant self-registration: uniqueness check, password hashing, persist,
/// verification email.
pub struct RegisterMerchantUseCase<'a, M, H, T, E>
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

impl<'a, M, H, T, E> RegisterMerchantUseCase<'a, M, H, T, E>
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

    /// Execute the registration use case.
    ///
    /// # Returns
    /// The password-free merchant projection on success, or
    /// `RegisterMerchantError` if the email or phone is already taken.
    #[tracing::instrument(name = "RegisterMerchantUseCase::execute", skip(self, request))]
    pub async fn execute(
        &self,
        request: NewMerchantRequest,
    ) -> Result<SafeMerchant, RegisterMerchantError> {
        let existing = self
            .merchant_store
            .find_by_email_or_phone(&request.email, &request.phone)
            .await?;

        if let Some(existing) = existing {
            if !existing.account_is_verified {
                notifications::dispatch_merchant_verification(
                    self.token_issuer,
                    self.mailer,
                    &self.config.frontend_base_url,
                    &existing,
                )
                .await;
                return Err(RegisterMerchantError::AlreadyExistsUnverified);
            }
            return Err(RegisterMerchantError::AlreadyExists);
        }

        let password_digest = self
            .credential_hasher
            .hash(&request.password)
            .await
            .map_err(RegisterMerchantError::HashingError)?;

        // A concurrent registration may have won the race since the lookup
        // above; the store's constraint check settles it.
        let created = self
            .merchant_store
            .create(NewMerchant {
                email: request.email,
                phone: request.phone,
                business_name: request.business_name,
                password_digest,
                base_currency: request.base_currency,
            })
            .await
            .map_err(|e| match e {
                MerchantStoreError::MerchantAlreadyExists => RegisterMerchantError::AlreadyExists,
                other => RegisterMerchantError::MerchantStoreError(other),
            })?;

        notifications::dispatch_merchant_verification(
            self.token_issuer,
            self.mailer,
            &self.config.frontend_base_url,
            &created,
        )
        .await;

        Ok(SafeMerchant::from(&created))
    }
}
