use std::sync::LazyLock;

use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

use crate::tokens::TokenTtls;

/// Runtime settings for the account service, loaded once from the
/// environment (a `.env` file is honored in development). Variables use the
/// `BURSAR_` prefix with `__` separating nested fields, e.g.
/// `BURSAR_TOKEN_TTLS__LOGIN_SESSION_MINUTES=60`.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub jwt_secret: Secret<String>,
    #[serde(default = "default_frontend_base_url")]
    pub frontend_base_url: String,
    #[serde(default)]
    pub token_ttls: TokenTtlSettings,
    #[serde(default)]
    pub mail: MailSettings,
}

#[derive(Debug, Deserialize)]
pub struct TokenTtlSettings {
    #[serde(default = "default_short_ttl_minutes")]
    pub onboarding_minutes: i64,
    #[serde(default = "default_short_ttl_minutes")]
    pub forgot_password_minutes: i64,
    #[serde(default = "default_login_session_minutes")]
    pub login_session_minutes: i64,
}

#[derive(Debug, Deserialize)]
pub struct MailSettings {
    #[serde(default = "default_postmark_base_url")]
    pub postmark_base_url: String,
    pub postmark_server_token: Option<Secret<String>>,
    #[serde(default = "default_mail_sender")]
    pub sender: String,
    #[serde(default = "default_mail_queue_depth")]
    pub queue_depth: usize,
}

fn default_frontend_base_url() -> String {
    "http://localhost:3000".to_owned()
}

fn default_short_ttl_minutes() -> i64 {
    30
}

fn default_login_session_minutes() -> i64 {
    1440
}

fn default_postmark_base_url() -> String {
    "https://api.postmarkapp.com".to_owned()
}

fn default_mail_sender() -> String {
    "accounts@bursar.io".to_owned()
}

fn default_mail_queue_depth() -> usize {
    256
}

impl Default for TokenTtlSettings {
    fn default() -> Self {
        Self {
            onboarding_minutes: default_short_ttl_minutes(),
            forgot_password_minutes: default_short_ttl_minutes(),
            login_session_minutes: default_login_session_minutes(),
        }
    }
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            postmark_base_url: default_postmark_base_url(),
            postmark_server_token: None,
            sender: default_mail_sender(),
            queue_depth: default_mail_queue_depth(),
        }
    }
}

impl Settings {
    /// Load settings once and cache them for the lifetime of the process.
    ///
    /// # Panics
    /// Panics on first call if required variables are missing or malformed.
    pub fn load() -> &'static Settings {
        static SETTINGS: LazyLock<Settings> = LazyLock::new(|| {
            Settings::from_env().expect("Failed to load bursar settings from the environment")
        });
        &SETTINGS
    }

    pub fn from_env() -> Result<Settings, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(Environment::with_prefix("BURSAR").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn token_ttls(&self) -> TokenTtls {
        TokenTtls {
            onboarding_minutes: self.token_ttls.onboarding_minutes,
            forgot_password_minutes: self.token_ttls.forgot_password_minutes,
            login_session_minutes: self.token_ttls.login_session_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_everything_but_the_secret() {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "jwt_secret": "s3cret"
        }))
        .unwrap();

        assert_eq!(settings.frontend_base_url, "http://localhost:3000");
        assert_eq!(settings.token_ttls.onboarding_minutes, 30);
        assert_eq!(settings.token_ttls.login_session_minutes, 1440);
        assert_eq!(settings.mail.queue_depth, 256);
        assert!(settings.mail.postmark_server_token.is_none());
    }

    #[test]
    fn overrides_win_over_defaults() {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "jwt_secret": "s3cret",
            "token_ttls": { "login_session_minutes": 60 },
            "mail": { "queue_depth": 4 }
        }))
        .unwrap();

        let ttls = settings.token_ttls();
        assert_eq!(ttls.login_session_minutes, 60);
        // Untouched siblings keep their defaults.
        assert_eq!(ttls.onboarding_minutes, 30);
        assert_eq!(settings.mail.queue_depth, 4);
    }
}
