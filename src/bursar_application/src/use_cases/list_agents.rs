use bursar_core::{AgentStore, AgentStoreError, SafeAgent};

/// One page of agents plus the total count across all pages.
#[derive(Debug, Clone)]
pub struct AgentPage {
    pub items: Vec<SafeAgent>,
    pub total: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ListAgentsError {
    #[error("Agent store error: {0}")]
    AgentStoreError(#[from] AgentStoreError),
}

/// Pages over agents, most recently created first. Page and page size are
/// passed through unclamped.
pub struct ListAgentsUseCase<'a, A>
where
    A: AgentStore,
{
    agent_store: &'a A,
}

impl<'a, A> ListAgentsUseCase<'a, A>
where
    A: AgentStore,
{
    pub fn new(agent_store: &'a A) -> Self {
        Self { agent_store }
    }

    #[tracing::instrument(name = "ListAgentsUseCase::execute", skip(self))]
    pub async fn execute(&self, page: u32, page_size: u32) -> Result<AgentPage, ListAgentsError> {
        let (items, total) = self.agent_store.list(page, page_size).await?;
        Ok(AgentPage { items, total })
    }
}
