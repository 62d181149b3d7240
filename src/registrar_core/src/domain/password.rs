use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A plaintext password as received from the caller.
///
/// Parsing only rejects empty input. Strength policy belongs to the credential encoder,
/// which is the only component that ever sees the exposed value.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::InvalidPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
