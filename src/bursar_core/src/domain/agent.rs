use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{email::Email, password::PasswordDigest, phone::Phone};

/// Opaque agent identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgentId(Uuid);

impl AgentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AgentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An agent account as stored. Stays inside store implementations; every
/// store method returns [`SafeAgent`].
#[derive(Debug, Clone)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub email: Email,
    pub phone_number: Option<Phone>,
    pub password_digest: PasswordDigest,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an agent; password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NewAgent {
    pub name: String,
    pub email: Email,
    pub phone_number: Option<Phone>,
    pub password_digest: PasswordDigest,
}

/// Partial update. `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub phone_number: Option<Phone>,
    pub password_digest: Option<PasswordDigest>,
}

/// Outward-facing agent projection; the phone number passes through as-is,
/// including absent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SafeAgent {
    pub id: AgentId,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Agent> for SafeAgent {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            name: agent.name.clone(),
            email: agent.email.expose().to_owned(),
            phone_number: agent.phone_number.as_ref().map(|p| p.as_str().to_owned()),
            is_active: agent.is_active,
            created_at: agent.created_at,
            updated_at: agent.updated_at,
        }
    }
}
