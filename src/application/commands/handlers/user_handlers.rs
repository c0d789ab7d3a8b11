//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewUser, UserRepositoryPort};
use crate::domain::{Email, User, UserChanges};

// ============================================================================
// CreateUser
// ============================================================================

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        let email = Email::parse(command.email)?;

        let user = self
            .user_repo
            .insert(NewUser {
                name: command.name,
                email,
                role: command.role,
            })
            .await?;

        tracing::info!(
            user_id = %user.id(),
            email = %user.email(),
            "User created"
        );

        Ok(user)
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// UpdateUser Handler
///
/// 先校验整个请求，再一次性应用；校验失败时用户保持不变
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<User, ApplicationError> {
        let changes = UserChanges {
            name: command.name,
            email: command.email.map(Email::parse).transpose()?,
            role: command.role,
        };

        if changes.is_empty() {
            tracing::debug!(user_id = %command.user_id, "Update carries no field changes");
        }

        let user = self.user_repo.update(command.user_id, changes).await?;

        tracing::info!(user_id = %user.id(), "User updated");

        Ok(user)
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<(), ApplicationError> {
        self.user_repo.delete(command.user_id).await?;

        tracing::info!(user_id = %command.user_id, "User deleted");

        Ok(())
    }
}
