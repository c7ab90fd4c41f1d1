//! Login Use Case
//!
//! Verifies a user name and password. No session or token is issued; the
//! caller only learns the user id.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::UsersConfig;
use crate::domain::repository::{UserSession, UserStore};
use crate::domain::value_object::user_name::UserName;
use crate::error::{UserError, UserResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    config: Arc<UsersConfig>,
}

impl<S> LoginUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, config: Arc<UsersConfig>) -> Self {
        Self { store, config }
    }

    /// Every failure is [`UserError::InvalidCredentials`] except store errors.
    pub async fn execute(&self, input: LoginInput) -> UserResult<LoginOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| UserError::InvalidCredentials)?;
        let password =
            ClearTextPassword::new(input.password).map_err(|_| UserError::InvalidCredentials)?;

        let mut session = self.store.begin().await?;
        let user = session.find_by_user_name(&user_name).await?;
        session.commit().await?;

        let user = user.ok_or(UserError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(UserError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id,
        })
    }
}
