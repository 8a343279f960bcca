use bursar_core::{
    AgentId, AgentStore, AgentStoreError, AgentUpdate, CredentialHasher, Email, Password, Phone,
    SafeAgent,
};

/// Partial update payload; absent fields leave the stored values untouched.
#[derive(Debug, Default)]
pub struct UpdateAgentRequest {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub phone_number: Option<Phone>,
    pub password: Option<Password>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateAgentError {
    #[error("Agent not found")]
    NotFound,
    #[error("Another agent already holds that email or phone number")]
    AlreadyExists,
    #[error("Agent store error: {0}")]
    AgentStoreError(#[from] AgentStoreError),
    #[error("Failed to hash password: {0}")]
    HashingError(String),
}

/// Partial field replacement on an agent; a supplied password is re-hashed
/// before it is persisted.
pub struct UpdateAgentUseCase<'a, A, H>
where
    A: AgentStore,
    H: CredentialHasher,
{
    agent_store: &'a A,
    credential_hasher: &'a H,
}

impl<'a, A, H> UpdateAgentUseCase<'a, A, H>
where
    A: AgentStore,
    H: CredentialHasher,
{
    pub fn new(agent_store: &'a A, credential_hasher: &'a H) -> Self {
        Self {
            agent_store,
            credential_hasher,
        }
    }

    #[tracing::instrument(name = "UpdateAgentUseCase::execute", skip(self, request))]
    pub async fn execute(
        &self,
        id: AgentId,
        request: UpdateAgentRequest,
    ) -> Result<SafeAgent, UpdateAgentError> {
        let password_digest = match &request.password {
            Some(password) => Some(
                self.credential_hasher
                    .hash(password)
                    .await
                    .map_err(UpdateAgentError::HashingError)?,
            ),
            None => None,
        };

        let updated = self
            .agent_store
            .update(
                id,
                AgentUpdate {
                    name: request.name,
                    email: request.email,
                    phone_number: request.phone_number,
                    password_digest,
                },
            )
            .await
            .map_err(|e| match e {
                AgentStoreError::AgentNotFound => UpdateAgentError::NotFound,
                AgentStoreError::AgentAlreadyExists => UpdateAgentError::AlreadyExists,
                other => UpdateAgentError::AgentStoreError(other),
            })?;

        Ok(updated)
    }
}
