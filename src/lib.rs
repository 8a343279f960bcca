//! # Bursar - Merchant Account Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account
//! service components. Use this crate to get access to the whole merchant
//! and agent account surface in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! bursar = { path = "../bursar" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Merchant`, `Agent`, etc.
//! - **Repository traits**: `MerchantStore`, `AgentStore`
//! - **Use cases**: `RegisterMerchantUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `HashMapMerchantStore`, `Argon2CredentialHasher`, `PostmarkMailer`, etc.
//! - **Service**: `AccountService` - The main entry point for the account service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use bursar_core::*;
}

// Re-export most commonly used core types at the root level
pub use bursar_core::{
    Agent, AgentId, Email, EmailError, Merchant, MerchantId, Password, PasswordError, Phone,
    PhoneError, SafeAgent, SafeMerchant, TokenClaims, TokenPurpose,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use bursar_core::{AgentStore, AgentStoreError, MerchantStore, MerchantStoreError};
}

// Re-export ports at root level
pub use bursar_core::{
    AgentStore, AgentStoreError, CredentialHasher, MailTemplate, Mailer, MerchantStore,
    MerchantStoreError, TokenError, TokenIssuer,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use bursar_application::*;
}

// Re-export use cases at root level
pub use bursar_application::{
    CompleteVerificationUseCase, CreateAgentUseCase, FlowConfig, InitiateForgotPasswordUseCase,
    ListAgentsUseCase, LoginUseCase, RegisterMerchantUseCase, ResetPasswordUseCase,
    SetAgentActiveUseCase, UpdateAgentUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use bursar_adapters::persistence::*;
    }

    /// Mailer implementations
    pub mod email {
        pub use bursar_adapters::email::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use bursar_adapters::hashing::*;
    }

    /// Token issuance and validation
    pub mod tokens {
        pub use bursar_adapters::tokens::*;
    }

    /// Configuration
    pub mod config {
        pub use bursar_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use bursar_adapters::{
    config::Settings,
    email::{MockMailer, PostmarkMailer, QueuedMailer},
    hashing::Argon2CredentialHasher,
    persistence::{HashMapMerchantStore, InMemoryAgentStore},
    tokens::{JwtTokenIssuer, TokenTtls},
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

/// Main account service
pub use bursar_account_service::{AccountService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
