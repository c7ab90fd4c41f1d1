//! Store Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//!
//! Every use case opens one [`UserSession`] through [`UserStore::begin`],
//! passes it by `&mut` to each read and write, and calls
//! [`UserSession::commit`] only on success. Dropping a session without
//! committing discards its writes.

use std::future::Future;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::UserResult;

/// Unit of work over the users table
#[trait_variant::make(UserSession: Send)]
pub trait LocalUserSession {
    /// Insert a user and return it with its generated id
    async fn insert(&mut self, user: &NewUser) -> UserResult<User>;

    /// Find user by exact user name
    async fn find_by_user_name(&mut self, user_name: &UserName) -> UserResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&mut self, email: &Email) -> UserResult<bool>;

    /// Check if user name exists
    async fn exists_by_user_name(&mut self, user_name: &UserName) -> UserResult<bool>;

    /// Make the session's writes visible and release it
    async fn commit(self) -> UserResult<()>;
}

/// Source of [`UserSession`]s
pub trait UserStore: Clone + Send + Sync + 'static {
    type Session: UserSession;

    /// Acquire a session for one operation
    fn begin(&self) -> impl Future<Output = UserResult<Self::Session>> + Send;
}
