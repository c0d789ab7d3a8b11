//! User Service - 用户管理 REST API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户实体、邮箱校验、部分更新
//!
//! 应用层 (application/):
//! - Ports: 端口定义（UserRepository）
//! - Commands: CQRS 命令处理器（创建、更新、删除）
//! - Queries: CQRS 查询处理器（详情、列表）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Memory: 内存用户仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
