//! Payment repository
//!
//! Payments are append-only. Nothing reconciles them against job cost.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Payment record from database
#[derive(Debug, Clone, FromRow)]
pub struct Payment {
    pub id: i64,
    pub job_id: i64,
    pub amount: i64,
    pub paid_at: DateTime<Utc>,
}

/// Payment repository
pub struct PaymentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PaymentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a payment against `job_id`, stamped with the current time.
    pub async fn create(&self, job_id: i64, amount: i64) -> Result<Payment, DbError> {
        let payment: Payment = sqlx::query_as(
            r#"
            INSERT INTO payments (job_id, amount, paid_at)
            VALUES (?, ?, ?)
            RETURNING id, job_id, amount, paid_at
            "#,
        )
        .bind(job_id)
        .bind(amount)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(payment)
    }

    /// List payments recorded against a job.
    pub async fn list_for_job(&self, job_id: i64) -> Result<Vec<Payment>, DbError> {
        let payments: Vec<Payment> = sqlx::query_as(
            r#"
            SELECT id, job_id, amount, paid_at
            FROM payments
            WHERE job_id = ?
            ORDER BY id
            "#,
        )
        .bind(job_id)
        .fetch_all(self.pool)
        .await?;

        Ok(payments)
    }
}
