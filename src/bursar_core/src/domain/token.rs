use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The enumerated reason a token was issued, bound into the token at
/// issuance and checked again at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    Onboarding,
    ForgotPassword,
    LoginSession,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::ForgotPassword => "forgot_password",
            Self::LoginSession => "login_session",
        }
    }
}

impl std::fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a successfully validated token proves: who it was issued for and
/// why. Validity is established by signature and expiry alone; nothing is
/// looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: Uuid,
    pub purpose: TokenPurpose,
}
