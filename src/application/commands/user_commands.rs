//! User Commands

use crate::domain::UserId;

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// 更新用户命令（部分更新，None 表示不修改）
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: UserId,
}
