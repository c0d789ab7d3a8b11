//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：创建、更新、删除用户

mod user_commands;

pub mod handlers;

pub use user_commands::*;
