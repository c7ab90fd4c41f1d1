//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::UsersConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{UserSession, UserStore};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{UserError, UserResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    config: Arc<UsersConfig>,
}

impl<S> RegisterUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, config: Arc<UsersConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> UserResult<User> {
        let user_name =
            UserName::new(&input.user_name).map_err(|e| UserError::Validation(e.to_string()))?;
        let email = Email::new(&input.email).map_err(|e| UserError::Validation(e.to_string()))?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| UserError::Validation(e.to_string()))?;

        // Hash before opening the session so no store resources are held
        // during the expensive part.
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| UserError::Internal(e.to_string()))?;

        let mut session = self.store.begin().await?;

        if session.exists_by_email(&email).await? {
            return Err(UserError::EmailTaken);
        }

        if session.exists_by_user_name(&user_name).await? {
            return Err(UserError::UsernameTaken);
        }

        let user = session
            .insert(&NewUser::new(user_name, email, password_hash))
            .await?;
        session.commit().await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryUserRepository;

    fn use_case(store: &MemoryUserRepository) -> RegisterUseCase<MemoryUserRepository> {
        RegisterUseCase::new(Arc::new(store.clone()), Arc::new(UsersConfig::default()))
    }

    fn input(user_name: &str, email: &str) -> RegisterInput {
        RegisterInput {
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: "securepassword123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let store = MemoryUserRepository::new();
        let user = use_case(&store)
            .execute(input("alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(user.user_id.get(), 1);
        assert_eq!(user.user_name.as_str(), "alice");
        assert_ne!(user.password_hash.as_phc_string(), "securepassword123");
        assert!(user.password_hash.as_phc_string().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_duplicate_email_with_new_user_name() {
        let store = MemoryUserRepository::new();
        let register = use_case(&store);
        register
            .execute(input("alice", "alice@example.com"))
            .await
            .unwrap();

        let err = register
            .execute(input("alice2", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::EmailTaken));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_user_name_with_new_email() {
        let store = MemoryUserRepository::new();
        let register = use_case(&store);
        register
            .execute(input("alice", "alice@example.com"))
            .await
            .unwrap();

        let err = register
            .execute(input("alice", "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_email_checked_before_user_name() {
        let store = MemoryUserRepository::new();
        let register = use_case(&store);
        register
            .execute(input("alice", "alice@example.com"))
            .await
            .unwrap();

        let err = register
            .execute(input("alice", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::EmailTaken));
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let store = MemoryUserRepository::new();
        let mut bad = input("bob", "bob@example.com");
        bad.password = "short".to_string();

        let err = use_case(&store).execute(bad).await.unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters");
        assert_eq!(store.len().await, 0);
    }
}
