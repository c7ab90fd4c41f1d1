//! User Entity
//!
//! A registered account. Rows are created once and never modified or
//! deleted by this service.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// Stored user
#[derive(Debug, Clone)]
pub struct User {
    /// Database-generated key
    pub user_id: UserId,
    /// Unique login handle
    pub user_name: UserName,
    /// Unique email
    pub email: Email,
    /// Argon2id PHC string; never leaves the service
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

/// User about to be inserted; the store assigns `user_id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
}

impl NewUser {
    pub fn new(user_name: UserName, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            user_name,
            email,
            password_hash,
        }
    }
}
