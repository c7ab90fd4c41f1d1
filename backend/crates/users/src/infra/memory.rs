//! In-memory Store Implementation
//!
//! Backs the router in tests and local experiments. A session holds the
//! table lock for its whole lifetime and works on a staged copy, so
//! sessions are serialized and an uncommitted session leaves no trace.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{UserSession, UserStore};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{UserError, UserResult};

#[derive(Debug, Clone, Default)]
struct UserTable {
    last_id: i64,
    rows: Vec<User>,
}

/// In-memory user store
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    table: Arc<Mutex<UserTable>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed users
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserStore for MemoryUserRepository {
    type Session = MemoryUserSession;

    async fn begin(&self) -> UserResult<MemoryUserSession> {
        let guard = self.table.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(MemoryUserSession { guard, staged })
    }
}

pub struct MemoryUserSession {
    guard: OwnedMutexGuard<UserTable>,
    staged: UserTable,
}

impl UserSession for MemoryUserSession {
    async fn insert(&mut self, user: &NewUser) -> UserResult<User> {
        // Same guarantees as the table's unique constraints
        if self.exists_by_email(&user.email).await? {
            return Err(UserError::EmailTaken);
        }
        if self.exists_by_user_name(&user.user_name).await? {
            return Err(UserError::UsernameTaken);
        }

        self.staged.last_id += 1;
        let stored = User {
            user_id: UserId::from_i64(self.staged.last_id),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        };
        self.staged.rows.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_user_name(&mut self, user_name: &UserName) -> UserResult<Option<User>> {
        Ok(self
            .staged
            .rows
            .iter()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }

    async fn exists_by_email(&mut self, email: &Email) -> UserResult<bool> {
        Ok(self.staged.rows.iter().any(|u| &u.email == email))
    }

    async fn exists_by_user_name(&mut self, user_name: &UserName) -> UserResult<bool> {
        Ok(self.staged.rows.iter().any(|u| &u.user_name == user_name))
    }

    async fn commit(self) -> UserResult<()> {
        let Self { mut guard, staged } = self;
        *guard = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn new_user(name: &str, email: &str) -> NewUser {
        let hash = ClearTextPassword::new("securepassword123".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        NewUser::new(UserName::new(name).unwrap(), Email::new(email).unwrap(), hash)
    }

    #[tokio::test]
    async fn test_uncommitted_session_is_discarded() {
        let store = MemoryUserRepository::new();

        let mut session = store.begin().await.unwrap();
        session.insert(&new_user("dave", "dave@example.com")).await.unwrap();
        drop(session);

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_committed_ids_are_sequential() {
        let store = MemoryUserRepository::new();

        let mut session = store.begin().await.unwrap();
        let first = session.insert(&new_user("a", "a@example.com")).await.unwrap();
        let second = session.insert(&new_user("b", "b@example.com")).await.unwrap();
        session.commit().await.unwrap();

        assert_eq!(first.user_id.get(), 1);
        assert_eq!(second.user_id.get(), 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_insert_enforces_uniqueness() {
        let store = MemoryUserRepository::new();

        let mut session = store.begin().await.unwrap();
        session.insert(&new_user("a", "a@example.com")).await.unwrap();
        let err = session
            .insert(&new_user("b", "a@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::EmailTaken));
    }
}
