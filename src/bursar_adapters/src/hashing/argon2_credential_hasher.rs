use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use bursar_core::{CredentialHasher, Password, PasswordDigest};

/// Argon2id-backed credential hasher. The hashing work is CPU-bound, so both
/// operations run on the blocking thread pool instead of stalling the async
/// executor.
#[derive(Debug, Clone, Default)]
pub struct Argon2CredentialHasher;

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self
    }

    fn argon2() -> Result<Argon2<'static>, String> {
        Ok(Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
        ))
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, String> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                Self::argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordDigest::new(Secret::from(h.to_string())))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| e.to_string())?;

        result
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, candidate: &Password, digest: &PasswordDigest) -> bool {
        let candidate = candidate.clone();
        let digest = digest.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                // A malformed digest is a mismatch, not an error.
                let Ok(parsed) = PasswordHash::new(digest.as_ref().expose_secret()) else {
                    return false;
                };
                let Ok(argon2) = Self::argon2() else {
                    return false;
                };
                argon2
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &parsed)
                    .is_ok()
            })
        })
        .await;

        result.unwrap_or(false)
    }
}
