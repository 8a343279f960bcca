use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    agent::{AgentId, AgentUpdate, NewAgent, SafeAgent},
    email::Email,
    merchant::{Merchant, MerchantId, NewMerchant},
    password::PasswordDigest,
    phone::Phone,
};

// MerchantStore port trait and errors
#[derive(Debug, Error)]
pub enum MerchantStoreError {
    #[error("Merchant already exists")]
    MerchantAlreadyExists,
    #[error("Merchant not found")]
    MerchantNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for MerchantStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MerchantAlreadyExists, Self::MerchantAlreadyExists)
                | (Self::MerchantNotFound, Self::MerchantNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence port for merchant records. Uniqueness of email and phone is
/// the store's responsibility; a violated constraint surfaces as
/// [`MerchantStoreError::MerchantAlreadyExists`], which also resolves races
/// between concurrent registrations.
#[async_trait]
pub trait MerchantStore: Send + Sync {
    /// Combined OR lookup used at registration time.
    async fn find_by_email_or_phone(
        &self,
        email: &Email,
        phone: &Phone,
    ) -> Result<Option<Merchant>, MerchantStoreError>;

    async fn create(&self, new_merchant: NewMerchant) -> Result<Merchant, MerchantStoreError>;

    /// Sets `account_is_verified`. Re-setting an already verified account is
    /// a harmless redundant write.
    async fn mark_verified(&self, id: MerchantId) -> Result<Merchant, MerchantStoreError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<Merchant>, MerchantStoreError>;

    async fn update_password(
        &self,
        id: MerchantId,
        digest: PasswordDigest,
    ) -> Result<Merchant, MerchantStoreError>;
}

// AgentStore port trait and errors
#[derive(Debug, Error)]
pub enum AgentStoreError {
    #[error("Agent already exists")]
    AgentAlreadyExists,
    #[error("Agent not found")]
    AgentNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for AgentStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AgentAlreadyExists, Self::AgentAlreadyExists)
                | (Self::AgentNotFound, Self::AgentNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence port for agent records. Every return is a [`SafeAgent`]; the
/// password digest never crosses this boundary upward.
#[async_trait]
pub trait AgentStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<SafeAgent>, AgentStoreError>;

    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<SafeAgent>, AgentStoreError>;

    async fn create(&self, new_agent: NewAgent) -> Result<SafeAgent, AgentStoreError>;

    /// Page of agents ordered by creation time descending, plus the total
    /// count across all pages. Pages are 1-based.
    async fn list(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<SafeAgent>, u64), AgentStoreError>;

    async fn find_by_id(&self, id: AgentId) -> Result<Option<SafeAgent>, AgentStoreError>;

    /// Partial field replacement; `None` fields keep their stored value.
    /// A new email or phone already held by a different agent is rejected
    /// with `AgentAlreadyExists`.
    async fn update(&self, id: AgentId, update: AgentUpdate) -> Result<SafeAgent, AgentStoreError>;

    async fn set_active(&self, id: AgentId, active: bool) -> Result<(), AgentStoreError>;
}
