//! Shared in-memory port implementations for use-case tests.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use bursar_core::{
    Agent, AgentId, AgentStore, AgentStoreError, AgentUpdate, CredentialHasher, Email,
    MailTemplate, Mailer, Merchant, MerchantId, MerchantStore, MerchantStoreError, NewAgent,
    NewMerchant, Password, PasswordDigest, Phone, SafeAgent, TokenClaims, TokenError, TokenIssuer,
    TokenPurpose,
};

use crate::config::FlowConfig;

pub(crate) fn email(address: &str) -> Email {
    Email::try_from(Secret::from(address.to_owned())).unwrap()
}

pub(crate) fn phone(number: &str) -> Phone {
    Phone::try_from(number.to_owned()).unwrap()
}

pub(crate) fn password(plaintext: &str) -> Password {
    Password::try_from(Secret::from(plaintext.to_owned())).unwrap()
}

pub(crate) fn flow_config() -> FlowConfig {
    FlowConfig {
        frontend_base_url: "https://app.example.com".to_owned(),
    }
}

pub(crate) fn merchant(address: &str, number: &str) -> Merchant {
    let now = Utc::now();
    Merchant {
        id: MerchantId::new(),
        email: email(address),
        phone: phone(number),
        business_name: "Acme Trading".to_owned(),
        password_digest: PlainHasher::digest("secret-pw"),
        account_is_verified: false,
        is_active: true,
        base_currency: "NGN".to_owned(),
        created_at: now,
        updated_at: now,
    }
}

// ---------------------------------------------------------------------------
// Merchant store
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub(crate) struct InMemoryMerchantStore {
    merchants: Arc<RwLock<Vec<Merchant>>>,
}

impl InMemoryMerchantStore {
    pub(crate) async fn insert(&self, merchant: Merchant) {
        self.merchants.write().await.push(merchant);
    }

    pub(crate) async fn get(&self, id: MerchantId) -> Option<Merchant> {
        self.merchants
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }
}

#[async_trait]
impl MerchantStore for InMemoryMerchantStore {
    async fn find_by_email_or_phone(
        &self,
        email: &Email,
        phone: &Phone,
    ) -> Result<Option<Merchant>, MerchantStoreError> {
        Ok(self
            .merchants
            .read()
            .await
            .iter()
            .find(|m| &m.email == email || &m.phone == phone)
            .cloned())
    }

    async fn create(&self, new_merchant: NewMerchant) -> Result<Merchant, MerchantStoreError> {
        let mut merchants = self.merchants.write().await;
        if merchants
            .iter()
            .any(|m| m.email == new_merchant.email || m.phone == new_merchant.phone)
        {
            return Err(MerchantStoreError::MerchantAlreadyExists);
        }
        let now = Utc::now();
        let merchant = Merchant {
            id: MerchantId::new(),
            email: new_merchant.email,
            phone: new_merchant.phone,
            business_name: new_merchant.business_name,
            password_digest: new_merchant.password_digest,
            account_is_verified: false,
            is_active: true,
            base_currency: new_merchant.base_currency,
            created_at: now,
            updated_at: now,
        };
        merchants.push(merchant.clone());
        Ok(merchant)
    }

    async fn mark_verified(&self, id: MerchantId) -> Result<Merchant, MerchantStoreError> {
        let mut merchants = self.merchants.write().await;
        let merchant = merchants
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MerchantStoreError::MerchantNotFound)?;
        merchant.account_is_verified = true;
        merchant.updated_at = Utc::now();
        Ok(merchant.clone())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Merchant>, MerchantStoreError> {
        Ok(self
            .merchants
            .read()
            .await
            .iter()
            .find(|m| &m.email == email)
            .cloned())
    }

    async fn update_password(
        &self,
        id: MerchantId,
        digest: PasswordDigest,
    ) -> Result<Merchant, MerchantStoreError> {
        let mut merchants = self.merchants.write().await;
        let merchant = merchants
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MerchantStoreError::MerchantNotFound)?;
        merchant.password_digest = digest;
        merchant.updated_at = Utc::now();
        Ok(merchant.clone())
    }
}

// ---------------------------------------------------------------------------
// Agent store
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub(crate) struct InMemoryAgentStore {
    agents: Arc<RwLock<Vec<Agent>>>,
}

impl InMemoryAgentStore {
    pub(crate) async fn get(&self, id: AgentId) -> Option<Agent> {
        self.agents.read().await.iter().find(|a| a.id == id).cloned()
    }
}

#[async_trait]
impl AgentStore for InMemoryAgentStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<SafeAgent>, AgentStoreError> {
        Ok(self
            .agents
            .read()
            .await
            .iter()
            .find(|a| &a.email == email)
            .map(SafeAgent::from))
    }

    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<SafeAgent>, AgentStoreError> {
        Ok(self
            .agents
            .read()
            .await
            .iter()
            .find(|a| a.phone_number.as_ref() == Some(phone))
            .map(SafeAgent::from))
    }

    async fn create(&self, new_agent: NewAgent) -> Result<SafeAgent, AgentStoreError> {
        let mut agents = self.agents.write().await;
        let duplicate = agents.iter().any(|a| {
            a.email == new_agent.email
                || (new_agent.phone_number.is_some()
                    && a.phone_number == new_agent.phone_number)
        });
        if duplicate {
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
        Ok(self
            .agents
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .map(SafeAgent::from))
    }

    async fn update(&self, id: AgentId, update: AgentUpdate) -> Result<SafeAgent, AgentStoreError> {
        let mut agents = self.agents.write().await;
        let pos = agents
            .iter()
            .position(|a| a.id == id)
            .ok_or(AgentStoreError::AgentNotFound)?;
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

// ---------------------------------------------------------------------------
// Hasher, token issuer, mailer
// ---------------------------------------------------------------------------

/// Reversible stand-in hasher so tests can assert on stored digests without
/// paying for argon2.
#[derive(Default, Clone)]
pub(crate) struct PlainHasher;

impl PlainHasher {
    pub(crate) fn digest(plaintext: &str) -> PasswordDigest {
        PasswordDigest::new(Secret::from(format!("plain:{plaintext}")))
    }
}

#[async_trait]
impl CredentialHasher for PlainHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, String> {
        Ok(Self::digest(password.as_ref().expose_secret()))
    }

    async fn verify(&self, candidate: &Password, digest: &PasswordDigest) -> bool {
        digest.as_ref().expose_secret()
            == &format!("plain:{}", candidate.as_ref().expose_secret())
    }
}

/// Hasher that always fails, for exercising the internal-error paths.
#[derive(Default, Clone)]
pub(crate) struct FailingHasher;

#[async_trait]
impl CredentialHasher for FailingHasher {
    async fn hash(&self, _password: &Password) -> Result<PasswordDigest, String> {
        Err("hasher exploded".to_owned())
    }

    async fn verify(&self, _candidate: &Password, _digest: &PasswordDigest) -> bool {
        false
    }
}

/// Token issuer producing transparent `purpose:subject` strings so tests can
/// assert on the embedded purpose and subject.
#[derive(Default, Clone)]
pub(crate) struct FakeTokenIssuer;

impl TokenIssuer for FakeTokenIssuer {
    fn issue(&self, subject: Uuid, purpose: TokenPurpose) -> Result<String, TokenError> {
        Ok(format!("{}:{subject}", purpose.as_str()))
    }

    fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (purpose, subject) = token.split_once(':').ok_or(TokenError::Invalid)?;
        let purpose = match purpose {
            "onboarding" => TokenPurpose::Onboarding,
            "forgot_password" => TokenPurpose::ForgotPassword,
            "login_session" => TokenPurpose::LoginSession,
            _ => return Err(TokenError::Invalid),
        };
        let subject = Uuid::from_str(subject).map_err(|_| TokenError::Invalid)?;
        Ok(TokenClaims { subject, purpose })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SentMail {
    pub(crate) recipient: String,
    pub(crate) template: MailTemplate,
    #[allow(dead_code)]
    pub(crate) subject: String,
    pub(crate) context: Value,
}

/// Mailer that records every message so dispatch counts are assertable.
#[derive(Default, Clone)]
pub(crate) struct RecordingMailer {
    sent: Arc<RwLock<Vec<SentMail>>>,
}

impl RecordingMailer {
    pub(crate) async fn sent(&self) -> Vec<SentMail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(
        &self,
        recipient: &Email,
        template: MailTemplate,
        subject: &str,
        context: Value,
    ) -> Result<(), String> {
        self.sent.write().await.push(SentMail {
            recipient: recipient.expose().to_owned(),
            template,
            subject: subject.to_owned(),
            context,
        });
        Ok(())
    }
}
