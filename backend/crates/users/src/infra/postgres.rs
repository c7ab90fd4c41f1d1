//! PostgreSQL Store Implementation

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{UserSession, UserStore};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{UserError, UserResult};

/// Constraint names from the `users` table migration
const USERNAME_UNIQUE: &str = "users_username_key";
const EMAIL_UNIQUE: &str = "users_email_key";

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserStore for PgUserRepository {
    type Session = PgUserSession;

    async fn begin(&self) -> UserResult<PgUserSession> {
        let tx = self.pool.begin().await?;
        Ok(PgUserSession { tx })
    }
}

/// One transaction; rolled back on drop unless committed
pub struct PgUserSession {
    tx: Transaction<'static, Postgres>,
}

impl UserSession for PgUserSession {
    async fn insert(&mut self, user: &NewUser) -> UserResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_unique_violation)?;

        row.into_user()
    }

    async fn find_by_user_name(&mut self, user_name: &UserName) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&mut *self.tx)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&mut self, email: &Email) -> UserResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(exists)
    }

    async fn exists_by_user_name(&mut self, user_name: &UserName) -> UserResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(user_name.as_str())
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(exists)
    }

    async fn commit(self) -> UserResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

/// A concurrent registration can pass both pre-checks; the unique
/// constraints still decide, and report the same errors.
fn map_unique_violation(err: sqlx::Error) -> UserError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some(EMAIL_UNIQUE) => return UserError::EmailTaken,
                Some(USERNAME_UNIQUE) => return UserError::UsernameTaken,
                _ => {}
            }
        }
    }
    UserError::Database(err)
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> UserResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| UserError::Internal(format!("user {}: {}", self.id, e)))?;

        Ok(User {
            user_id: UserId::from_i64(self.id),
            user_name: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash,
            created_at: self.created_at,
        })
    }
}
