use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use bursar_core::{
    Agent, AgentId, AgentStore, AgentStoreError, AgentUpdate, Email, NewAgent, Phone, SafeAgent,
};

/// In-memory agent store backed by an insertion-ordered `Vec`, so listing
/// newest-first is a reverse walk. Full records stay inside; every method
/// hands out `SafeAgent` only.
#[derive(Default, Clone)]
pub struct InMemoryAgentStore {
    agents: Arc<RwLock<Vec<Agent>>>,
}

impl InMemoryAgentStore {
    pub fn new() -> Self {
        Self {
            agents: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl AgentStore for InMemoryAgentStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<SafeAgent>, AgentStoreError> {
        let agents = self.agents.read().await;
        Ok(agents
            .iter()
            .find(|a| &a.email == email)
            .map(SafeAgent::from))
    }

    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<SafeAgent>, AgentStoreError> {
        let agents = self.agents.read().await;
        Ok(agents
            .iter()
            .find(|a| a.phone_number.as_ref() == Some(phone))
            .map(SafeAgent::from))
    }

    async fn create(&self, new_agent: NewAgent) -> Result<SafeAgent, AgentStoreError> {
        let mut agents = self.agents.write().await;
        let taken = agents.iter().any(|a| {
            a.email == new_agent.email
                || (new_agent.phone_number.is_some() && a.phone_number == new_agent.phone_number)
        });
        if taken {
            return Err(AgentStoreError::AgentAlreadyExists);
        }

        let now = Utc::now();
        let agent = Agent {
            id: AgentId::new(),
            name: new_agent.name,
            email: new_agent.email,
            phone_number: new_agent.phone_number,
            password_digest: new_agent.password_digest,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let safe = SafeAgent::from(&agent);
        agents.push(agent);
        Ok(safe)
    }

    async fn list(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<SafeAgent>, u64), AgentStoreError> {
        let agents = self.agents.read().await;
        let skip = (page.max(1) as usize - 1) * page_size as usize;
        let items = agents
            .iter()
            .rev()
            .skip(skip)
            .take(page_size as usize)
            .map(SafeAgent::from)
            .collect();
        Ok((items, agents.len() as u64))
    }

    async fn find_by_id(&self, id: AgentId) -> Result<Option<SafeAgent>, AgentStoreError> {
        let agents = self.agents.read().await;
        Ok(agents.iter().find(|a| a.id == id).map(SafeAgent::from))
    }

    async fn update(&self, id: AgentId, update: AgentUpdate) -> Result<SafeAgent, AgentStoreError> {
        let mut agents = self.agents.write().await;
        let pos = agents
            .iter()
            .position(|a| a.id == id)
            .ok_or(AgentStoreError::AgentNotFound)?;

        // Same uniqueness rule as create, ignoring the agent being updated.
        let taken = agents.iter().filter(|a| a.id != id).any(|a| {
            update.email.as_ref().is_some_and(|e| &a.email == e)
                || (update.phone_number.is_some() && a.phone_number == update.phone_number)
        });
        if taken {
            return Err(AgentStoreError::AgentAlreadyExists);
        }

        let agent = &mut agents[pos];
        if let Some(name) = update.name {
            agent.name = name;
        }
        if let Some(email) = update.email {
            agent.email = email;
        }
        if let Some(phone_number) = update.phone_number {
            agent.phone_number = Some(phone_number);
        }
        if let Some(password_digest) = update.password_digest {
            agent.password_digest = password_digest;
        }
        agent.updated_at = Utc::now();

        Ok(SafeAgent::from(&*agent))
    }

    async fn set_active(&self, id: AgentId, active: bool) -> Result<(), AgentStoreError> {
        let mut agents = self.agents.write().await;
        let agent = agents
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AgentStoreError::AgentNotFound)?;
        agent.is_active = active;
        agent.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bursar_core::PasswordDigest;
    use secrecy::Secret;

    fn new_agent(name: &str, address: &str, number: Option<&str>) -> NewAgent {
        NewAgent {
            name: name.to_owned(),
            email: Email::try_from(Secret::from(address.to_owned())).unwrap(),
            phone_number: number.map(|n| Phone::try_from(n.to_owned()).unwrap()),
            password_digest: PasswordDigest::new(Secret::from("digest".to_owned())),
        }
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_but_two_absent_phones_do_not() {
        let store = InMemoryAgentStore::new();
        store
            .create(new_agent("Ada", "x@y.com", None))
            .await
            .unwrap();

        let same_email = store.create(new_agent("Eve", "x@y.com", None)).await;
        assert_eq!(
            same_email.unwrap_err(),
            AgentStoreError::AgentAlreadyExists
        );

        // A second agent with no phone is fine; absence is not a value.
        assert!(store.create(new_agent("Eve", "e@y.com", None)).await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_present_phone_conflicts() {
        let store = InMemoryAgentStore::new();
        store
            .create(new_agent("Ada", "x@y.com", Some("0801")))
            .await
            .unwrap();

        let same_phone = store.create(new_agent("Eve", "e@y.com", Some("0801"))).await;
        assert_eq!(
            same_phone.unwrap_err(),
            AgentStoreError::AgentAlreadyExists
        );
    }

    #[tokio::test]
    async fn list_pages_newest_first() {
        let store = InMemoryAgentStore::new();
        for i in 0..23 {
            store
                .create(new_agent(&format!("Agent {i}"), &format!("a{i}@y.com"), None))
                .await
                .unwrap();
        }

        let (first, total) = store.list(1, 10).await.unwrap();
        assert_eq!(total, 23);
        assert_eq!(first[0].name, "Agent 22");
        assert_eq!(first[9].name, "Agent 13");

        let (second, _) = store.list(2, 10).await.unwrap();
        assert_eq!(second[0].name, "Agent 12");
        assert_eq!(second.len(), 10);

        let (third, _) = store.list(3, 10).await.unwrap();
        assert_eq!(third.len(), 3);
    }

    #[tokio::test]
    async fn page_zero_reads_as_first_page() {
        let store = InMemoryAgentStore::new();
        store
            .create(new_agent("Ada", "x@y.com", None))
            .await
            .unwrap();

        let (items, _) = store.list(0, 10).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn update_cannot_take_another_agents_email() {
        let store = InMemoryAgentStore::new();
        store
            .create(new_agent("Ada", "first@y.com", None))
            .await
            .unwrap();
        let second = store
            .create(new_agent("Eve", "second@y.com", None))
            .await
            .unwrap();

        let result = store
            .update(
                second.id,
                AgentUpdate {
                    email: Some(Email::try_from(Secret::from("first@y.com".to_owned())).unwrap()),
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(result.unwrap_err(), AgentStoreError::AgentAlreadyExists);

        // The first email still resolves to its original holder.
        let holder = store
            .find_by_email(&Email::try_from(Secret::from("first@y.com".to_owned())).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(holder.name, "Ada");
    }

    #[tokio::test]
    async fn update_cannot_take_another_agents_phone() {
        let store = InMemoryAgentStore::new();
        store
            .create(new_agent("Ada", "first@y.com", Some("0801")))
            .await
            .unwrap();
        let second = store
            .create(new_agent("Eve", "second@y.com", None))
            .await
            .unwrap();

        let result = store
            .update(
                second.id,
                AgentUpdate {
                    phone_number: Some(Phone::try_from("0801".to_owned()).unwrap()),
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(result.unwrap_err(), AgentStoreError::AgentAlreadyExists);
    }

    #[tokio::test]
    async fn update_keeping_own_email_succeeds() {
        let store = InMemoryAgentStore::new();
        let agent = store
            .create(new_agent("Ada", "x@y.com", None))
            .await
            .unwrap();

        let updated = store
            .update(
                agent.id,
                AgentUpdate {
                    name: Some("Ada L.".to_owned()),
                    email: Some(Email::try_from(Secret::from("x@y.com".to_owned())).unwrap()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Ada L.");
    }

    #[tokio::test]
    async fn update_on_unknown_id_is_not_found() {
        let store = InMemoryAgentStore::new();
        let result = store.update(AgentId::new(), AgentUpdate::default()).await;
        assert_eq!(result.unwrap_err(), AgentStoreError::AgentNotFound);
    }
}
