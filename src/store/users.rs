//! User store accessor
//!
//! Creates and lists user records in the `users` collection.

use crate::store::documents::DocumentStore;
use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{User, UserSummary};
use std::sync::Arc;

/// Collection holding user documents
pub const USERS: &str = "users";

/// Typed accessor over the `users` collection
pub struct UserStore {
    docs: Arc<DocumentStore>,
}

impl UserStore {
    pub fn new(docs: Arc<DocumentStore>) -> Self {
        Self { docs }
    }

    /// Create a new user with a store-generated id
    ///
    /// Usernames are unique; the check and the insert run under a
    /// single store lock hold, so concurrent creates of the same name
    /// cannot both succeed.
    pub async fn create(&self, username: &str) -> StoreResult<User> {
        let user = User::new(uuid::Uuid::new_v4().to_string(), username);
        self.docs
            .insert_unique(USERS, &user.id, &user, "username")
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation(_) => {
                    StoreError::DuplicateUsername(username.to_string())
                }
                other => other,
            })?;

        tracing::info!(user_id = %user.id, username = %user.username, "Created user");

        Ok(user)
    }

    /// List all users with log data projected out, in store order
    pub async fn list(&self) -> StoreResult<Vec<UserSummary>> {
        let users: Vec<User> = self.docs.list(USERS).await?;
        Ok(users.iter().map(User::summary).collect())
    }

    /// Look up a user by id
    pub async fn get(&self, id: &str) -> StoreResult<Option<User>> {
        self.docs.find(USERS, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> UserStore {
        UserStore::new(Arc::new(DocumentStore::open_in_memory().unwrap()))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let users = store();

        let created = users.create("alice").await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.username, "alice");
        assert!(created.log.is_empty());

        let fetched = users.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let users = store();

        users.create("alice").await.unwrap();
        let err = users.create("alice").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(_)));
    }

    #[tokio::test]
    async fn test_list_projects_out_log() {
        let users = store();

        let alice = users.create("alice").await.unwrap();
        users.create("bob").await.unwrap();

        let listed = users.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, alice.id);
        assert_eq!(listed[0].username, "alice");
        assert_eq!(listed[1].username, "bob");
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let users = store();
        assert!(users.get("missing").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_single_winner() {
        let users = Arc::new(store());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let users = Arc::clone(&users);
                tokio::spawn(async move { users.create("alice").await })
            })
            .collect();

        let mut created = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(StoreError::DuplicateUsername(_)) => rejected += 1,
                Err(other) => panic!("unexpected error: {}", other),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(rejected, 31);
        assert_eq!(users.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let users = store();
        let a = users.create("alice").await.unwrap();
        let b = users.create("bob").await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
