use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    auth_token::AuthToken,
    base_host::BaseHost,
    credential::Credential,
    email::Email,
    password::Password,
    user::{NewUser, User},
};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Password does not satisfy the policy: {0}")]
    PolicyViolation(String),
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
}

/// Derives storable credentials from plaintext passwords.
#[async_trait]
pub trait CredentialEncoder: Send + Sync {
    async fn encode(
        &self,
        subject: &NewUser,
        password: &Password,
    ) -> Result<Credential, CredentialError>;
}

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Issues bearer tokens for persisted users.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, subject: &User) -> Result<AuthToken, TokenIssuerError>;
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Failed to render message: {0}")]
    RenderFailed(String),
    #[error("Failed to deliver message: {0}")]
    DeliveryFailed(String),
}

/// Sends the welcome message after an account has been created.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_welcome(&self, subject: &User, base_host: &BaseHost)
    -> Result<(), NotifierError>;
}

#[derive(Debug, Error)]
pub enum EmailClientError {
    #[error("Invalid email client configuration: {0}")]
    Configuration(String),
    #[error("Email request failed: {0}")]
    RequestFailed(String),
}

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), EmailClientError>;
}
