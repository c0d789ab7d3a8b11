//! Repository Ports - 出站端口
//!
//! 定义用户数据存取的抽象接口
//! 具体实现在 infrastructure 层（当前为内存实现，可替换为数据库）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Email, User, UserChanges, UserId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// 待创建的用户（尚未分配 ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub role: String,
}

/// User Repository Port
///
/// 实现必须保证:
/// - `find_all` 按插入顺序返回
/// - `insert` 的 ID 分配与追加是一个原子操作
/// - 写操作之间互斥
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 获取所有用户
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// 根据 ID 查找用户（按集合顺序的第一个匹配）
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// 分配 `max + 1`（空集合为 1）并追加到末尾
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// 原地应用变更，返回更新后的用户
    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, RepositoryError>;

    /// 删除用户
    async fn delete(&self, id: UserId) -> Result<(), RepositoryError>;
}
