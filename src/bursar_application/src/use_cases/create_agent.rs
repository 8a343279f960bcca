use bursar_core::{
    AgentStore, AgentStoreError, CredentialHasher, Email, Mailer, NewAgent, Password, Phone,
    SafeAgent, TokenIssuer,
};

use crate::{config::FlowConfig, notifications};

#[derive(Debug)]
pub struct NewAgentRequest {
    pub name: String,
    pub email: Email,
    pub phone_number: Option<Phone>,
    pub password: Password,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateAgentError {
    #[error("Agent already exists")]
    AlreadyExists,
    #[error("Agent store error: {0}")]
    AgentStoreError(#[from] AgentStoreError),
    #[error("Failed to hash password: {0}")]
    HashingError(String),
}

/// Creates a subordinate agent account under the merchant organization and
/// mails the agent their verification link.
pub struct CreateAgentUseCase<'a, A, H, T, E>
where
    A: AgentStore,
    H: CredentialHasher,
    T: TokenIssuer,
    E: Mailer,
{
    agent_store: &'a A,
    credential_hasher: &'a H,
    token_issuer: &'a T,
    mailer: &'a E,
    config: &'a FlowConfig,
}

impl<'a, A, H, T, E> CreateAgentUseCase<'a, A, H, T, E>
where
    A: AgentStore,
    H: CredentialHasher,
    T: TokenIssuer,
    E: Mailer,
{
    pub fn new(
        agent_store: &'a A,
        credential_hasher: &'a H,
        token_issuer: &'a T,
        mailer: &'a E,
        config: &'a FlowConfig,
    ) -> Self {
        Self {
            agent_store,
            credential_hasher,
            token_issuer,
            mailer,
            config,
        }
    }

    #[tracing::instrument(name = "CreateAgentUseCase::execute", skip(self, request))]
    pub async fn execute(&self, request: NewAgentRequest) -> Result<SafeAgent, CreateAgentError> {
        if self
            .agent_store
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(CreateAgentError::AlreadyExists);
        }

        // The phone check is a second, separate lookup; it only runs when a
        // phone number was supplied.
        if let Some(phone) = &request.phone_number {
            if self.agent_store.find_by_phone(phone).await?.is_some() {
                return Err(CreateAgentError::AlreadyExists);
            }
        }

        let password_digest = self
            .credential_hasher
            .hash(&request.password)
            .await
            .map_err(CreateAgentError::HashingError)?;

        let recipient = request.email.clone();
        let created = self
            .agent_store
            .create(NewAgent {
                name: request.name,
                email: request.email,
                phone_number: request.phone_number,
                password_digest,
            })
            .await
            .map_err(|e| match e {
                AgentStoreError::AgentAlreadyExists => CreateAgentError::AlreadyExists,
                other => CreateAgentError::AgentStoreError(other),
            })?;

        notifications::dispatch_agent_verification(
            self.token_issuer,
            self.mailer,
            &self.config.frontend_base_url,
            &recipient,
            &created,
        )
        .await;

        Ok(created)
    }
}
