//! Memory Layer - In-Memory State Management
//!
//! 用户集合的内存仓储实现

mod user_repository;

pub use user_repository::InMemoryUserRepository;
