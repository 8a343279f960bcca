use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("Invalid email address")]
    Invalid,
}

/// A validated email address. Wrapped in `Secret` so it is redacted in
/// debug output and log fields.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    /// Expose the raw address for outward-facing projections and mail
    /// envelopes.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if EMAIL_REGEX.is_match(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(EmailError::Invalid)
        }
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn parse(s: &str) -> Result<Email, EmailError> {
        Email::try_from(Secret::from(s.to_owned()))
    }

    #[test]
    fn accepts_plain_address() {
        assert!(parse("merchant@example.com").is_ok());
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert_eq!(parse("merchant.example.com").unwrap_err(), EmailError::Invalid);
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(parse("").is_err());
        assert!(parse("a b@example.com").is_err());
        assert!(parse("a@exa mple.com").is_err());
    }

    #[test]
    fn equality_compares_addresses() {
        assert_eq!(parse("a@b.co").unwrap(), parse("a@b.co").unwrap());
        assert_ne!(parse("a@b.co").unwrap(), parse("c@b.co").unwrap());
    }

    #[quickcheck]
    fn never_accepts_strings_without_at(s: String) -> bool {
        let s = s.replace('@', "");
        parse(&s).is_err()
    }
}
