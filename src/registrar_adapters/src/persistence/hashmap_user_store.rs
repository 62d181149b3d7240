use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use registrar_core::{Email, PendingUser, User, UserId, UserStore, UserStoreError};

/// In-memory account store.
///
/// The existence check and the insert in `save` happen under one write guard, which is
/// what enforces email uniqueness between concurrent registrations.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn save(&self, user: PendingUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = user.into_user(UserId::new());
        users.insert(user.email().clone(), user.clone());
        Ok(user)
    }
}
