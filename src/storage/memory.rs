//! In-memory user repository.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::users::{Repository, User};

/// A user repository held in process memory.
///
/// Lookups share a read lock; `store` takes the write lock and so excludes
/// all readers and writers for its duration.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Repository for InMemoryUserRepository {
    fn store(&self, user: User) -> UserResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| UserError::Storage("user store lock poisoned during write".into()))?;
        users.insert(user.id, user);
        Ok(())
    }

    fn find(&self, id: i64) -> UserResult<User> {
        let users = self
            .users
            .read()
            .map_err(|_| UserError::Storage("user store lock poisoned during read".into()))?;
        users.get(&id).cloned().ok_or(UserError::NotFound)
    }

    fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| UserError::Storage("user store lock poisoned during read".into()))?;
        Ok(users.values().cloned().collect())
    }
}
