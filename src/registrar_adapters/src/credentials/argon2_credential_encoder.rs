use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use registrar_core::{Credential, CredentialEncoder, CredentialError, NewUser, Password};
use secrecy::{ExposeSecret, Secret};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Argon2id credential encoder producing PHC strings.
///
/// Every call draws a fresh salt, so encoding the same password twice never yields the
/// same credential.
#[derive(Debug, Clone, Copy)]
pub struct Argon2CredentialEncoder {
    memory_cost: u32,
    iterations: u32,
    parallelism: u32,
}

impl Argon2CredentialEncoder {
    pub fn new() -> Self {
        Self {
            memory_cost: 15000,
            iterations: 2,
            parallelism: 1,
        }
    }

    fn check_policy(password: &str) -> Result<(), CredentialError> {
        let length = password.chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(CredentialError::PolicyViolation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if length > MAX_PASSWORD_LENGTH {
            return Err(CredentialError::PolicyViolation(format!(
                "password must be at most {MAX_PASSWORD_LENGTH} characters"
            )));
        }
        Ok(())
    }
}

impl Default for Argon2CredentialEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CredentialEncoder for Argon2CredentialEncoder {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn encode(
        &self,
        _subject: &NewUser,
        password: &Password,
    ) -> Result<Credential, CredentialError> {
        Self::check_policy(password.as_ref().expose_secret())?;

        let password = password.clone();
        let encoder = *self;
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                let hasher = Argon2::new(
                    Algorithm::Argon2id,
                    Version::V0x13,
                    Params::new(
                        encoder.memory_cost,
                        encoder.iterations,
                        encoder.parallelism,
                        None,
                    )
                    .map_err(|e| CredentialError::HashingFailed(e.to_string()))?,
                );
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| Credential::new(Secret::new(h.to_string())))
                    .map_err(|e| CredentialError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialError::HashingFailed(e.to_string()))?;

        result
    }
}
