use chrono::{DateTime, Utc};
use thiserror::Error;

use super::{credential::Credential, email::Email, user_id::UserId, user_name::UserName};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Password must not be empty")]
    InvalidPassword,
    #[error("Name must not be empty")]
    InvalidName,
}

/// An account that has been requested but has no credential yet.
///
/// This is the subject handed to a credential encoder. It cannot be saved; attach the
/// encoder's output with [`NewUser::with_credential`] first.
#[derive(Debug, Clone)]
pub struct NewUser {
    name: UserName,
    email: Email,
    created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(name: UserName, email: Email) -> Self {
        Self {
            name,
            email,
            created_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn with_credential(self, credential: Credential) -> PendingUser {
        PendingUser {
            name: self.name,
            email: self.email,
            credential,
            created_at: self.created_at,
        }
    }
}

/// A fully formed account waiting to be written by the account store.
#[derive(Debug, Clone)]
pub struct PendingUser {
    name: UserName,
    email: Email,
    credential: Credential,
    created_at: DateTime<Utc>,
}

impl PendingUser {
    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Called by account stores once the row has been written under `id`.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            credential: self.credential,
            created_at: self.created_at,
        }
    }
}

/// A persisted account.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    credential: Credential,
    created_at: DateTime<Utc>,
}

impl User {
    /// Rehydrates a user read back from storage.
    pub fn from_parts(
        id: UserId,
        name: UserName,
        email: Email,
        credential: Credential,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            credential,
            created_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
