pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    auth_token::AuthToken,
    base_host::BaseHost,
    credential::Credential,
    email::Email,
    password::Password,
    user::{NewUser, PendingUser, User, UserError},
    user_id::UserId,
    user_name::UserName,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{
        CredentialEncoder, CredentialError, EmailClient, EmailClientError, Notifier,
        NotifierError, TokenIssuer, TokenIssuerError,
    },
};
