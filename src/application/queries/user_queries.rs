//! User Queries

use crate::domain::UserId;

/// 获取用户详情查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: UserId,
}

/// 列出所有用户查询
#[derive(Debug, Clone)]
pub struct ListUsers;
