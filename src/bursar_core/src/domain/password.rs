use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
}

/// A plaintext password. Only ever held transiently on the way into the
/// credential hasher; never persisted or logged.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            Err(PasswordError::Empty)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// A one-way password hash in PHC string format. Opaque to everything but
/// the credential hasher that produced it.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PasswordDigest {
    pub fn new(digest: Secret<String>) -> Self {
        Self(digest)
    }
}

impl AsRef<Secret<String>> for PasswordDigest {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
