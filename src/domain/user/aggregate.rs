//! User Context - Entity

use serde::Serialize;

use super::{Email, UserId};

/// 用户实体
///
/// 不变量:
/// - id 分配后不可变
/// - email 始终包含 `@`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    role: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: Email, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            role: role.into(),
        }
    }

    /// 应用一组已校验的变更，id 保持不变
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
    }

    // Getters
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

/// 部分更新
///
/// 构造时即完成校验，因此应用过程不会失败
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub role: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}
