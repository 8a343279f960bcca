pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    agent::{Agent, AgentId, AgentUpdate, NewAgent, SafeAgent},
    email::{Email, EmailError},
    merchant::{Merchant, MerchantId, NewMerchant, SafeMerchant},
    password::{Password, PasswordDigest, PasswordError},
    phone::{Phone, PhoneError},
    token::{TokenClaims, TokenPurpose},
};

pub use ports::{
    repositories::{AgentStore, AgentStoreError, MerchantStore, MerchantStoreError},
    services::{CredentialHasher, MailTemplate, Mailer, TokenError, TokenIssuer},
};
