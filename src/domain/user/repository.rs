//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage, keyed uniquely by [`UserId`]
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Insert or replace the record with the same identifier
    async fn save(&self, user: User) -> Result<(), DomainError>;

    /// Get a user by identifier
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Delete a user, returns true if a record was removed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// All stored users, in no particular order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Check if a user identifier exists
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<String, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        /// Number of stored records, bypassing the failure switch
        pub async fn len(&self) -> usize {
            self.users.read().await.len()
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: User) -> Result<(), DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            users.insert(user.id().as_str().to_string(), user);
            Ok(())
        }

        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(id.as_str()).cloned())
        }

        async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            Ok(users.remove(id.as_str()).is_some())
        }

        async fn find_all(&self) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.values().cloned().collect())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn create_test_user(id: &str) -> User {
            User::new(UserId::new(id), format!("{id}@example.com"), None)
        }

        #[tokio::test]
        async fn test_save_and_find() {
            let repo = MockUserRepository::new();
            let user = create_test_user("user1");

            repo.save(user.clone()).await.unwrap();

            let retrieved = repo.find_by_id(user.id()).await.unwrap();
            assert_eq!(retrieved, Some(user));
        }

        #[tokio::test]
        async fn test_default_exists() {
            let repo = MockUserRepository::new();
            repo.save(create_test_user("user1")).await.unwrap();

            assert!(repo.exists(&UserId::new("user1")).await.unwrap());
            assert!(!repo.exists(&UserId::new("user2")).await.unwrap());
        }

        #[tokio::test]
        async fn test_should_fail() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.find_all().await;
            assert!(result.is_err());
        }
    }
}
