use secrecy::{ExposeSecret, Secret};

/// Hashed password material produced by a credential encoder.
///
/// There is no way to build a `Credential` from a [`Password`](super::password::Password);
/// only encoders and stores rehydrating persisted rows construct one.
#[derive(Debug, Clone)]
pub struct Credential(Secret<String>);

impl Credential {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for Credential {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Credential {}
