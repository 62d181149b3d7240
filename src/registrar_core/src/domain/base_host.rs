use serde::Deserialize;

/// Public base URL of the application, used to build links in outgoing messages.
///
/// The value is carried as configured; nothing in the registration flow inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BaseHost(String);

impl BaseHost {
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BaseHost {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for BaseHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
