//! In-Memory User Repository Implementation
//!
//! 用户集合保存在进程内存中，进程退出即丢弃。
//! 读操作共享读锁，写操作独占写锁，因此 ID 分配不会产生重复。
//! 按 ID 查找为线性扫描，O(n)。

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::{NewUser, RepositoryError, UserRepositoryPort};
use crate::domain::{Email, User, UserChanges, UserId};

/// 启动时预置的演示用户
const DEMO_USERS: &[(u64, &str, &str, &str)] = &[
    (1, "Alice Johnson", "alice@example.com", "developer"),
    (2, "Bob Smith", "bob@example.com", "designer"),
    (3, "Charlie Davis", "charlie@example.com", "manager"),
    (4, "Diana Prince", "diana@example.com", "developer"),
];

/// 内存用户仓储
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// 空集合
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// 预置 4 个演示用户（ID 1-4）
    pub fn seeded() -> Self {
        let users = DEMO_USERS
            .iter()
            .filter_map(|&(id, name, email, role)| {
                Email::parse(email)
                    .ok()
                    .map(|email| User::new(UserId::new(id), name, email, role))
            })
            .collect();
        Self::with_users(users)
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(users: &[User]) -> Result<UserId, RepositoryError> {
    match users.iter().map(User::id).max() {
        None => Ok(UserId::FIRST),
        Some(max) => max.checked_next().ok_or_else(|| {
            RepositoryError::Storage(format!("user id space exhausted after {}", max))
        }),
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        let user = User::new(next_id(&users)?, user.name, user.email, user.role);
        users.push(user.clone());
        tracing::debug!(user_id = %user.id(), total = users.len(), "User inserted");
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or(RepositoryError::NotFound(id))?;
        user.apply(changes);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| u.id() == id)
            .ok_or(RepositoryError::NotFound(id))?;
        users.remove(index);
        tracing::debug!(user_id = %id, total = users.len(), "User removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: Email::parse(format!("{}@example.com", name.to_lowercase())).unwrap(),
            role: "tester".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_collection() {
        let repo = InMemoryUserRepository::seeded();
        let users = repo.find_all().await.unwrap();
        assert_eq!(users.len(), 4);
        assert_eq!(users[3].name(), "Diana Prince");
        assert_eq!(users[3].email().as_str(), "diana@example.com");
    }

    #[tokio::test]
    async fn test_user_lifecycle() {
        let repo = InMemoryUserRepository::new();

        // Insert
        let eve = repo.insert(new_user("Eve")).await.unwrap();
        assert_eq!(eve.id(), UserId::FIRST);

        // Find
        let found = repo.find_by_id(eve.id()).await.unwrap();
        assert_eq!(found, Some(eve.clone()));

        // Update
        let updated = repo
            .update(
                eve.id(),
                UserChanges {
                    name: Some("Eve Adams".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name(), "Eve Adams");
        assert_eq!(updated.role(), "tester");

        // Delete
        repo.delete(eve.id()).await.unwrap();
        assert_eq!(repo.find_by_id(eve.id()).await.unwrap(), None);
        assert!(matches!(
            repo.delete(eve.id()).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_id_is_max_plus_one_not_len_plus_one() {
        let repo = InMemoryUserRepository::seeded();

        repo.delete(UserId::new(1)).await.unwrap();
        repo.delete(UserId::new(2)).await.unwrap();
        let user = repo.insert(new_user("Grace")).await.unwrap();
        assert_eq!(user.id(), UserId::new(5));

        // 删除最大 ID 后，新用户会复用该 ID
        repo.delete(UserId::new(5)).await.unwrap();
        let user = repo.insert(new_user("Heidi")).await.unwrap();
        assert_eq!(user.id(), UserId::new(5));
    }

    #[tokio::test]
    async fn test_insert_fails_when_id_space_exhausted() {
        let max = User::new(
            UserId::new(u64::MAX),
            "Max",
            Email::parse("max@example.com").unwrap(),
            "edge",
        );
        let repo = InMemoryUserRepository::with_users(vec![max]);

        let result = repo.insert(new_user("Judy")).await;
        assert!(matches!(result, Err(RepositoryError::Storage(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_appends_to_end() {
        let repo = InMemoryUserRepository::seeded();
        repo.insert(new_user("Ivan")).await.unwrap();

        let users = repo.find_all().await.unwrap();
        assert_eq!(users.last().map(|u| u.name()), Some("Ivan"));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::seeded();
        let result = repo.update(UserId::new(42), UserChanges::default()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == UserId::new(42)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let repo = InMemoryUserRepository::seeded().arc();

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert(new_user(&format!("User{}", i))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let user = handle.await.unwrap().unwrap();
            assert!(ids.insert(user.id()));
        }

        assert_eq!(ids.len(), 50);
        assert_eq!(repo.find_all().await.unwrap().len(), 54);
        assert_eq!(ids.iter().max(), Some(&UserId::new(54)));
    }
}
