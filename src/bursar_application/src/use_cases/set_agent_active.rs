use bursar_core::{AgentId, AgentStore, AgentStoreError};

#[derive(Debug, thiserror::Error)]
pub enum SetAgentActiveError {
    #[error("Agent not found")]
    NotFound,
    #[error("Agent store error: {0}")]
    AgentStoreError(#[from] AgentStoreError),
}

/// Toggles an agent's `is_active` flag; drives both enable and disable.
/// Setting the flag to its current value is an idempotent no-op.
pub struct SetAgentActiveUseCase<'a, A>
where
    A: AgentStore,
{
    agent_store: &'a A,
}

impl<'a, A> SetAgentActiveUseCase<'a, A>
where
    A: AgentStore,
{
    pub fn new(agent_store: &'a A) -> Self {
        Self { agent_store }
    }

    #[tracing::instrument(name = "SetAgentActiveUseCase::execute", skip(self))]
    pub async fn execute(&self, id: AgentId, active: bool) -> Result<(), SetAgentActiveError> {
        self.agent_store
            .set_active(id, active)
            .await
            .map_err(|e| match e {
                AgentStoreError::AgentNotFound => SetAgentActiveError::NotFound,
                other => SetAgentActiveError::AgentStoreError(other),
            })
    }
}
