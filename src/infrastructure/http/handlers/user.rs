//! User HTTP Handlers

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    Json,
};
use http::StatusCode;
use std::sync::Arc;

use crate::application::{DeleteUser, GetUser, ListUsers};
use crate::domain::UserId;
use crate::infrastructure::http::dto::{
    CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse, UsersResponse,
};
use crate::infrastructure::http::error::{message, ApiError};
use crate::infrastructure::http::state::AppState;

/// 非十进制整数的 ID（包括无法解码的路径段）与未映射路由同样处理
fn parse_user_id(path: Result<Path<String>, PathRejection>) -> Result<UserId, ApiError> {
    let Path(raw) = path.map_err(|_| ApiError::RouteNotFound)?;
    raw.parse::<UserId>().map_err(|_| ApiError::RouteNotFound)
}

/// 请求体读取失败时同样返回 JSON 错误
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ApiError> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::BadRequest(message::NO_JSON_DATA.to_string())
        }
    })
}

/// 获取用户列表
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_user_id(path)?;

    let user = state.get_user_handler.handle(GetUser { user_id }).await?;

    Ok(Json(UserResponse::from(user)))
}

/// 创建用户
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let body = read_body(body)?;
    let request = CreateUserRequest::from_body(&body)?;

    let user = state
        .create_user_handler
        .handle(request.into_command())
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// 更新用户（部分更新）
///
/// 先确认用户存在，再处理请求体
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_user_id(path)?;

    state.get_user_handler.handle(GetUser { user_id }).await?;

    let body = read_body(body)?;
    let request = UpdateUserRequest::from_body(&body)?;

    let user = state
        .update_user_handler
        .handle(request.into_command(user_id))
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = parse_user_id(path)?;

    state
        .delete_user_handler
        .handle(DeleteUser { user_id })
        .await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
