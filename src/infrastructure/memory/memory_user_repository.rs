//! In-memory implementation of user repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Default)]
struct UserTable {
    last_id: i64,
    by_id: BTreeMap<i64, User>,
    by_username: HashMap<String, i64>,
}

/// User store held in process memory.
///
/// Mirrors the unique index on `username`: a duplicate insert fails with
/// [`AppError::Conflict`].
#[derive(Default)]
pub struct MemoryUserRepository {
    table: RwLock<UserTable>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, username: &str) -> Result<User, AppError> {
        let mut table = self.table.write().await;

        if table.by_username.contains_key(username) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                Some("users_username_key".to_string()),
            ));
        }

        table.last_id += 1;
        let user = User::new(table.last_id, username);
        table.by_username.insert(user.username.clone(), user.id);
        table.by_id.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.table.read().await.by_id.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;

        Ok(table
            .by_username
            .get(username)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.table.read().await.by_id.values().cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.table.read().await.by_id.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryUserRepository::new();

        let alice = repo.create("alice").await.unwrap();
        let bob = repo.create("bob").await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(bob.clone()));
        assert_eq!(repo.find_by_username("alice").await.unwrap(), Some(alice.clone()));
        assert_eq!(repo.list().await.unwrap(), vec![alice, bob]);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let repo = MemoryUserRepository::new();
        repo.create("alice").await.unwrap();

        let err = repo.create("alice").await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
