//! HTTP Handlers

mod fallback;
mod user;

pub use fallback::*;
pub use user::*;
