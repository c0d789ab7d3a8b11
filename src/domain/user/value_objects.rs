//! User Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::UserError;

/// 用户唯一标识
///
/// 由仓储按 `max(existing) + 1` 分配，分配后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// 空集合时分配的第一个 ID
    pub const FIRST: UserId = UserId(1);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 下一个 ID，ID 空间耗尽时返回 None
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 路径段只接受纯十进制数字（不带符号）
impl FromStr for UserId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }
        s.parse::<u64>().map(Self).map_err(|_| ())
    }
}

/// 邮箱地址
///
/// 不变量: 必须包含 `@`（唯一的校验规则）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl Into<String>) -> Result<Self, UserError> {
        let value = value.into();
        if !value.contains('@') {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_requires_at_sign() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("@").is_ok());
        assert_eq!(Email::parse("bad"), Err(UserError::InvalidEmail));
        assert_eq!(Email::parse(""), Err(UserError::InvalidEmail));
    }

    #[test]
    fn test_user_id_from_path_segment() {
        assert_eq!("42".parse::<UserId>(), Ok(UserId::new(42)));
        assert_eq!("007".parse::<UserId>(), Ok(UserId::new(7)));
        assert!("abc".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
        assert!("+1".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
        assert!("99999999999999999999999".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(5)).unwrap();
        assert_eq!(json, "5");
        assert_eq!(UserId::FIRST.checked_next(), Some(UserId::new(2)));
        assert_eq!(UserId::new(u64::MAX).checked_next(), None);
    }
}
