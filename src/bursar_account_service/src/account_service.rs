use bursar_application::{
    AgentPage, AuthenticatedMerchant, CompleteVerificationError, CompleteVerificationUseCase,
    CreateAgentError, CreateAgentUseCase, FlowConfig, ForgotPasswordError,
    InitiateForgotPasswordUseCase, ListAgentsError, ListAgentsUseCase, LoginError, LoginUseCase,
    NewAgentRequest, NewMerchantRequest, RegisterMerchantError, RegisterMerchantUseCase,
    ResetPasswordError, ResetPasswordUseCase, SetAgentActiveError, SetAgentActiveUseCase,
    UpdateAgentError, UpdateAgentRequest, UpdateAgentUseCase,
};
use bursar_core::{
    AgentId, AgentStore, CredentialHasher, Email, Mailer, MerchantId, MerchantStore, Password,
    SafeAgent, SafeMerchant, TokenError, TokenIssuer, TokenPurpose,
};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Account lifecycle facade over the individual use cases.
///
/// Owns one instance of each port and wires them into the right use case
/// per call, so embedders configure the stack once and get the whole
/// merchant and agent surface behind a single value.
pub struct AccountService<M, A, H, T, E>
where
    M: MerchantStore,
    A: AgentStore,
    H: CredentialHasher,
    T: TokenIssuer,
    E: Mailer,
{
    merchant_store: M,
    agent_store: A,
    credential_hasher: H,
    token_issuer: T,
    mailer: E,
    config: FlowConfig,
}

impl<M, A, H, T, E> AccountService<M, A, H, T, E>
where
    M: MerchantStore,
    A: AgentStore,
    H: CredentialHasher,
    T: TokenIssuer,
    E: Mailer,
{
    pub fn new(
        merchant_store: M,
        agent_store: A,
        credential_hasher: H,
        token_issuer: T,
        mailer: E,
        config: FlowConfig,
    ) -> Self {
        Self {
            merchant_store,
            agent_store,
            credential_hasher,
            token_issuer,
            mailer,
            config,
        }
    }

    pub async fn create_merchant_account(
        &self,
        request: NewMerchantRequest,
    ) -> Result<SafeMerchant, RegisterMerchantError> {
        RegisterMerchantUseCase::new(
            &self.merchant_store,
            &self.credential_hasher,
            &self.token_issuer,
            &self.mailer,
            &self.config,
        )
        .execute(request)
        .await
    }

    /// Flip the merchant to verified. No token guard here; callers that
    /// hold an onboarding link should resolve it to a merchant id first.
    pub async fn complete_verification(
        &self,
        id: MerchantId,
    ) -> Result<SafeMerchant, CompleteVerificationError> {
        CompleteVerificationUseCase::new(&self.merchant_store)
            .execute(id)
            .await
    }

    pub async fn login(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AuthenticatedMerchant, LoginError> {
        LoginUseCase::new(
            &self.merchant_store,
            &self.credential_hasher,
            &self.token_issuer,
            &self.mailer,
            &self.config,
        )
        .execute(email, password)
        .await
    }

    pub async fn initiate_forgot_password(&self, email: Email) -> Result<(), ForgotPasswordError> {
        InitiateForgotPasswordUseCase::new(
            &self.merchant_store,
            &self.token_issuer,
            &self.mailer,
            &self.config,
        )
        .execute(email)
        .await
    }

    pub async fn reset_password(
        &self,
        id: MerchantId,
        new_password: Password,
    ) -> Result<AuthenticatedMerchant, ResetPasswordError> {
        ResetPasswordUseCase::new(
            &self.merchant_store,
            &self.credential_hasher,
            &self.token_issuer,
        )
        .execute(id, new_password)
        .await
    }

    /// Resolve a recovery token to its merchant and reset the password.
    ///
    /// Only tokens minted for password recovery are accepted; a valid token
    /// of any other purpose is rejected the same as a forged one.
    pub async fn reset_password_with_token(
        &self,
        token: &str,
        new_password: Password,
    ) -> Result<AuthenticatedMerchant, ResetPasswordError> {
        let claims = self.token_issuer.validate(token)?;
        if claims.purpose != TokenPurpose::ForgotPassword {
            return Err(TokenError::Invalid.into());
        }

        self.reset_password(MerchantId::from(claims.subject), new_password)
            .await
    }

    pub async fn create_agent_account(
        &self,
        request: NewAgentRequest,
    ) -> Result<SafeAgent, CreateAgentError> {
        CreateAgentUseCase::new(
            &self.agent_store,
            &self.credential_hasher,
            &self.token_issuer,
            &self.mailer,
            &self.config,
        )
        .execute(request)
        .await
    }

    /// Newest-first page of agents. `None` falls back to page 1, ten per
    /// page.
    pub async fn list_agents(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<AgentPage, ListAgentsError> {
        ListAgentsUseCase::new(&self.agent_store)
            .execute(
                page.unwrap_or(DEFAULT_PAGE),
                page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            )
            .await
    }

    pub async fn update_agent(
        &self,
        id: AgentId,
        request: UpdateAgentRequest,
    ) -> Result<SafeAgent, UpdateAgentError> {
        UpdateAgentUseCase::new(&self.agent_store, &self.credential_hasher)
            .execute(id, request)
            .await
    }

    pub async fn disable_agent(&self, id: AgentId) -> Result<(), SetAgentActiveError> {
        SetAgentActiveUseCase::new(&self.agent_store)
            .execute(id, false)
            .await
    }

    pub async fn enable_agent(&self, id: AgentId) -> Result<(), SetAgentActiveError> {
        SetAgentActiveUseCase::new(&self.agent_store)
            .execute(id, true)
            .await
    }
}
