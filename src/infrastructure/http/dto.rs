//! Data Transfer Objects
//!
//! 请求体的解析规则：
//! - 必须是 JSON 对象，否则视为未提供数据
//! - 值为 `null` 的字段等同于缺省
//! - 出现的字段必须是字符串

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{CreateUser, UpdateUser};
use crate::domain::{User, UserId};

use super::error::{message, ApiError};

// ============================================================================
// Requests
// ============================================================================

/// 请求体中的用户字段，类型在转换为具体请求时再检查
#[derive(Debug, Deserialize)]
struct UserFields {
    name: Option<Value>,
    email: Option<Value>,
    role: Option<Value>,
}

impl UserFields {
    /// 只接受 JSON 对象；数组等其他形态一律视为未提供数据
    fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let no_json_data = || ApiError::BadRequest(message::NO_JSON_DATA.to_string());

        match serde_json::from_slice::<Value>(body) {
            Ok(object @ Value::Object(_)) => {
                serde_json::from_value(object).map_err(|_| no_json_data())
            }
            _ => Err(no_json_data()),
        }
    }

    fn has_all(&self) -> bool {
        self.name.is_some() && self.email.is_some() && self.role.is_some()
    }
}

fn string_field(value: Option<Value>) -> Result<Option<String>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ApiError::BadRequest(message::INVALID_FIELD_TYPES.to_string())),
    }
}

fn missing_fields() -> ApiError {
    ApiError::BadRequest(message::MISSING_FIELDS.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl CreateUserRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let fields = UserFields::from_body(body)?;

        if !fields.has_all() {
            return Err(missing_fields());
        }

        match (
            string_field(fields.name)?,
            string_field(fields.email)?,
            string_field(fields.role)?,
        ) {
            (Some(name), Some(email), Some(role)) => Ok(Self { name, email, role }),
            _ => Err(missing_fields()),
        }
    }

    pub fn into_command(self) -> CreateUser {
        CreateUser {
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UpdateUserRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let fields = UserFields::from_body(body)?;

        Ok(Self {
            name: string_field(fields.name)?,
            email: string_field(fields.email)?,
            role: string_field(fields.role)?,
        })
    }

    pub fn into_command(self, user_id: UserId) -> UpdateUser {
        UpdateUser {
            user_id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            role: user.role().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_request_message(err: ApiError) -> String {
        match err {
            ApiError::BadRequest(msg) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_create_request_complete() {
        let req = CreateUserRequest::from_body(
            br#"{"name":"Eve","email":"eve@x.com","role":"qa","extra":1}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Eve");
        assert_eq!(req.email, "eve@x.com");
        assert_eq!(req.role, "qa");
    }

    #[test]
    fn test_unparseable_bodies() {
        let bodies: [&[u8]; 7] = [
            b"",
            b"not json",
            b"null",
            b"[1,2]",
            br#"["X","x@y","dev"]"#,
            b"\"text\"",
            b"{",
        ];
        for body in bodies {
            let err = CreateUserRequest::from_body(body).unwrap_err();
            assert_eq!(bad_request_message(err), message::NO_JSON_DATA);

            let err = UpdateUserRequest::from_body(body).unwrap_err();
            assert_eq!(bad_request_message(err), message::NO_JSON_DATA);
        }
    }

    #[test]
    fn test_create_request_missing_fields() {
        let bodies: [&[u8]; 4] = [
            br#"{"name":"X","role":"y"}"#,
            br#"{}"#,
            br#"{"name":"X","email":null,"role":"y"}"#,
            br#"{"name":1,"role":"y"}"#,
        ];
        for body in bodies {
            let err = CreateUserRequest::from_body(body).unwrap_err();
            assert_eq!(bad_request_message(err), message::MISSING_FIELDS);
        }
    }

    #[test]
    fn test_non_string_fields_rejected() {
        let err = CreateUserRequest::from_body(br#"{"name":"X","email":5,"role":"y"}"#)
            .unwrap_err();
        assert_eq!(bad_request_message(err), message::INVALID_FIELD_TYPES);

        let err = UpdateUserRequest::from_body(br#"{"role":["admin"]}"#).unwrap_err();
        assert_eq!(bad_request_message(err), message::INVALID_FIELD_TYPES);
    }

    #[test]
    fn test_update_request_subset() {
        let req = UpdateUserRequest::from_body(br#"{"role":"x","name":null}"#).unwrap();
        assert_eq!(
            req,
            UpdateUserRequest {
                role: Some("x".to_string()),
                ..Default::default()
            }
        );

        let req = UpdateUserRequest::from_body(b"{}").unwrap();
        assert_eq!(req, UpdateUserRequest::default());
    }
}
