use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    user::{PendingUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence port for accounts.
///
/// Implementations must reject a second account for the same [`Email`] in `save` with
/// [`UserStoreError::UserAlreadyExists`], even when an earlier `find_by_email` returned
/// nothing.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn save(&self, user: PendingUser) -> Result<User, UserStoreError>;
}
