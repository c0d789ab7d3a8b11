//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::UserRepositoryPort;
use crate::application::queries::{GetUser, ListUsers};
use crate::domain::User;

/// GetUser Handler
pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUser) -> Result<User, ApplicationError> {
        self.user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", query.user_id))
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, _query: ListUsers) -> Result<Vec<User>, ApplicationError> {
        let users = self.user_repo.find_all().await?;
        tracing::debug!(count = users.len(), "Users listed");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::infrastructure::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let handler = GetUserHandler::new(Arc::new(InMemoryUserRepository::seeded()));

        let user = handler.handle(GetUser { user_id: UserId::new(3) }).await.unwrap();
        assert_eq!(user.name(), "Charlie Davis");

        let err = handler
            .handle(GetUser { user_id: UserId::new(999) })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "User", .. }));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let handler = ListUsersHandler::new(Arc::new(InMemoryUserRepository::seeded()));

        let ids: Vec<u64> = handler
            .handle(ListUsers)
            .await
            .unwrap()
            .iter()
            .map(|u| u.id().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
