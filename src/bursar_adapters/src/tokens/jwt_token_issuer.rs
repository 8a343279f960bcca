use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bursar_core::{TokenClaims, TokenError, TokenIssuer, TokenPurpose};

/// Per-purpose token lifetimes, in minutes. Onboarding and forgot-password
/// links are short-lived; the login-session lifetime is deployment policy.
#[derive(Debug, Clone, Copy)]
pub struct TokenTtls {
    pub onboarding_minutes: i64,
    pub forgot_password_minutes: i64,
    pub login_session_minutes: i64,
}

impl Default for TokenTtls {
    fn default() -> Self {
        Self {
            onboarding_minutes: 30,
            forgot_password_minutes: 30,
            login_session_minutes: 1440,
        }
    }
}

impl TokenTtls {
    fn minutes_for(&self, purpose: TokenPurpose) -> i64 {
        match purpose {
            TokenPurpose::Onboarding => self.onboarding_minutes,
            TokenPurpose::ForgotPassword => self.forgot_password_minutes,
            TokenPurpose::LoginSession => self.login_session_minutes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    purpose: TokenPurpose,
    exp: i64,
}

/// Stateless HS256 token issuer. Tokens carry the subject id, the purpose
/// they were issued for, and their expiry; nothing is ever stored. Expiry is
/// checked against the injected clock so tests can move time.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    secret: Secret<String>,
    ttls: TokenTtls,
    clock: Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>,
}

impl JwtTokenIssuer {
    pub fn new(secret: Secret<String>, ttls: TokenTtls) -> Self {
        Self {
            secret,
            ttls,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the wall clock, for simulating expiry in tests.
    pub fn with_clock(
        mut self,
        clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static,
    ) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: Uuid, purpose: TokenPurpose) -> Result<String, TokenError> {
        let ttl = chrono::Duration::try_minutes(self.ttls.minutes_for(purpose)).ok_or(
            TokenError::UnexpectedError("token TTL out of range".to_owned()),
        )?;

        let exp = (self.clock)()
            .checked_add_signed(ttl)
            .ok_or(TokenError::UnexpectedError(
                "token expiry out of range".to_owned(),
            ))?
            .timestamp();

        let claims = Claims {
            sub: subject,
            purpose,
            exp,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| TokenError::UnexpectedError(e.to_string()))
    }

    fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        // Expiry is compared against the injected clock below, not by the
        // decoder.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| TokenError::Invalid)?;

        if claims.exp <= (self.clock)().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(TokenClaims {
            subject: claims.sub,
            purpose: claims.purpose,
        })
    }
}
