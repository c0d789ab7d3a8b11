//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户实体及其不变量
//! - 邮箱格式校验
//! - 部分更新（先整体校验，再一次性应用）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{User, UserChanges};
pub use errors::UserError;
pub use value_objects::{Email, UserId};
