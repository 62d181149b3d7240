use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A normalized email address.
///
/// Normalization trims surrounding whitespace and lowercases the whole address, so two
/// `Email` values compare equal exactly when the account store must treat them as the
/// same account.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let normalized = Self::normalize(value.expose_secret());

        if normalized.is_empty() {
            return Err(UserError::InvalidEmail("email must not be empty".to_string()));
        }
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(UserError::InvalidEmail(
                "email must have the form local@domain.tld".to_string(),
            ));
        }

        Ok(Self(Secret::new(normalized)))
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
