use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PhoneError {
    #[error("Invalid phone number")]
    Invalid,
}

/// A phone number in loosely-normalized form: an optional leading `+`
/// followed by 4 to 15 digits. Stored merchants and agents are unique on
/// this value, so it is compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = value.strip_prefix('+').unwrap_or(&value);
        if (4..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(PhoneError::Invalid)
        }
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
