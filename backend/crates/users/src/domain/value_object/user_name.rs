//! User Name Value Object
//!
//! ユーザー名はログインと画面表示に使う公開ハンドル。
//!
//! ## 不変条件
//! - 前後の空白は除去して保存する
//! - 長さ: 1〜50文字（除去後、コードポイント数）
//! - 制御文字は禁止
//!
//! 一意性は完全一致で判定する（大文字小文字を区別）。
//! `Alice` と `alice` は別アカウントになる。

use serde::Serialize;
use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserNameError {
    #[error("Username must be between 1 and {max} characters")]
    Length { max: usize },

    #[error("Username contains invalid control characters")]
    InvalidCharacter,
}

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = raw.as_ref().trim();
        let len = trimmed.chars().count();

        if len == 0 || len > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::Length {
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(user_name: impl Into<String>) -> Self {
        Self(user_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
