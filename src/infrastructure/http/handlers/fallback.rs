//! Fallback Handler
//!
//! 未映射的路径、已知路径上不支持的方法都落到这里

use crate::infrastructure::http::error::ApiError;

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
