use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email,
    password::{Password, PasswordDigest},
    token::{TokenClaims, TokenPurpose},
};

/// Named mail templates dispatched by the account flows. Rendering is the
/// mail provider's concern; this core only picks the template and supplies
/// its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTemplate {
    MerchantAccountVerification,
    AgentAccountVerification,
    PasswordRecovery,
}

impl MailTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MerchantAccountVerification => "merchant-account-verification",
            Self::AgentAccountVerification => "agent-account-verification",
            Self::PasswordRecovery => "password-recovery",
        }
    }
}

impl std::fmt::Display for MailTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound notification port. Delivery is best effort from the account
/// flows' point of view; a failed send is logged by the caller, never
/// propagated as failure of the primary operation.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        recipient: &Email,
        template: MailTemplate,
        subject: &str,
        context: Value,
    ) -> Result<(), String>;
}

/// One-way password hashing port. Implementations must keep the CPU-bound
/// work off the async executor and must compare without early exit.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, String>;

    /// Returns `false` for a mismatch or a malformed digest; never errors.
    async fn verify(&self, candidate: &Password, digest: &PasswordDigest) -> bool;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Expired, Self::Expired)
                | (Self::Invalid, Self::Invalid)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Signed, stateless, time-boxed token port. Issuance picks the TTL for the
/// given purpose from the implementation's configuration; validation is
/// local and side-effect-free.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: Uuid, purpose: TokenPurpose) -> Result<String, TokenError>;

    fn validate(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
