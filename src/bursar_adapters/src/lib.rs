pub mod config;
pub mod email;
pub mod hashing;
pub mod persistence;
pub mod tokens;

// Re-export for convenience
pub use config::Settings;
pub use email::{MockMailer, PostmarkMailer, QueuedMailer};
pub use hashing::Argon2CredentialHasher;
pub use persistence::{HashMapMerchantStore, InMemoryAgentStore};
pub use tokens::{JwtTokenIssuer, TokenTtls};
