//! PostgreSQL Store Implementation

use chrono::{DateTime, Utc};
use kernel::id::{CalculationId, UserId};
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::entities::{Calculation, NewCalculation};
use crate::domain::repository::{CalculationSession, CalculationStore};
use crate::domain::value_objects::Page;
use crate::error::{CalculationError, CalculationResult};

/// PostgreSQL-backed calculation store
#[derive(Clone)]
pub struct PgCalculationRepository {
    pool: PgPool,
}

impl PgCalculationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CalculationStore for PgCalculationRepository {
    type Session = PgCalculationSession;

    async fn begin(&self) -> CalculationResult<PgCalculationSession> {
        let tx = self.pool.begin().await?;
        Ok(PgCalculationSession { tx })
    }
}

/// One transaction; rolled back on drop unless committed
pub struct PgCalculationSession {
    tx: Transaction<'static, Postgres>,
}

impl CalculationSession for PgCalculationSession {
    async fn insert(&mut self, calculation: &NewCalculation) -> CalculationResult<Calculation> {
        let row = sqlx::query_as::<_, CalculationRow>(
            r#"
            INSERT INTO calculations (a, b, "type", result, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, a, b, "type" AS operation, result, user_id, created_at
            "#,
        )
        .bind(calculation.a)
        .bind(calculation.b)
        .bind(calculation.operation.as_str())
        .bind(calculation.result)
        .bind(calculation.user_id.map(i64::from))
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_foreign_key_violation)?;

        row.into_calculation()
    }

    async fn find_by_id(&mut self, id: CalculationId) -> CalculationResult<Option<Calculation>> {
        let row = sqlx::query_as::<_, CalculationRow>(
            r#"
            SELECT id, a, b, "type" AS operation, result, user_id, created_at
            FROM calculations
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&mut *self.tx)
        .await?;

        row.map(CalculationRow::into_calculation).transpose()
    }

    async fn list(&mut self, page: Page) -> CalculationResult<Vec<Calculation>> {
        let rows = sqlx::query_as::<_, CalculationRow>(
            r#"
            SELECT id, a, b, "type" AS operation, result, user_id, created_at
            FROM calculations
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(i64::from(page.skip))
        .bind(i64::from(page.limit))
        .fetch_all(&mut *self.tx)
        .await?;

        rows.into_iter()
            .map(CalculationRow::into_calculation)
            .collect()
    }

    async fn update(&mut self, calculation: &Calculation) -> CalculationResult<Calculation> {
        let row = sqlx::query_as::<_, CalculationRow>(
            r#"
            UPDATE calculations
            SET a = $2, b = $3, "type" = $4, result = $5, user_id = $6
            WHERE id = $1
            RETURNING id, a, b, "type" AS operation, result, user_id, created_at
            "#,
        )
        .bind(calculation.calculation_id.get())
        .bind(calculation.a)
        .bind(calculation.b)
        .bind(calculation.operation.as_str())
        .bind(calculation.result)
        .bind(calculation.user_id.map(i64::from))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_foreign_key_violation)?;

        row.ok_or(CalculationError::CalculationNotFound)?
            .into_calculation()
    }

    async fn delete(&mut self, id: CalculationId) -> CalculationResult<bool> {
        let result = sqlx::query("DELETE FROM calculations WHERE id = $1")
            .bind(id.get())
            .execute(&mut *self.tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn user_exists(&mut self, user_id: UserId) -> CalculationResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(user_id.get())
                .fetch_one(&mut *self.tx)
                .await?;

        Ok(exists)
    }

    async fn commit(self) -> CalculationResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

/// The owner may vanish between `user_exists` and the write.
fn map_foreign_key_violation(err: sqlx::Error) -> CalculationError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return CalculationError::UserNotFound;
        }
    }
    CalculationError::Database(err)
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CalculationRow {
    id: i64,
    a: f64,
    b: f64,
    operation: String,
    result: f64,
    user_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl CalculationRow {
    fn into_calculation(self) -> CalculationResult<Calculation> {
        let operation = self
            .operation
            .parse()
            .map_err(|e| CalculationError::Internal(format!("calculation {}: {}", self.id, e)))?;

        Ok(Calculation {
            calculation_id: CalculationId::from_i64(self.id),
            a: self.a,
            b: self.b,
            operation,
            result: self.result,
            user_id: self.user_id.map(UserId::from_i64),
            created_at: self.created_at,
        })
    }
}
