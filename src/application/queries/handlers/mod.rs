//! Query Handlers 实现

mod user_handlers;

pub use user_handlers::*;
