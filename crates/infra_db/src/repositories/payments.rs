//! Payment repository (read-only)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::PortError;
use domain_lending::ports::PaymentRepository;
use domain_lending::Payment;

use crate::error::to_port_error;

/// PostgreSQL adapter for [`PaymentRepository`]
#[derive(Debug, Clone)]
pub struct PgPayments {
    pool: PgPool,
}

impl PgPayments {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: i64,
    loan_id: i64,
    currency_code: String,
    payment_date: Option<DateTime<Utc>>,
    amount: Option<i64>,
    method: Option<String>,
    status: Option<String>,
    transaction_id: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Payment {
            id: row.id,
            loan_id: row.loan_id,
            currency_code: row.currency_code,
            payment_date: row.payment_date.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            amount: row.amount.unwrap_or_default(),
            method: row.method.unwrap_or_default(),
            status: row.status.unwrap_or_default(),
            transaction_id: row.transaction_id.unwrap_or_default(),
            created_at: row.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

const COLUMNS: &str = "id, loan_id, currency_code, payment_date, amount, method, \
     status, transaction_id, created_at";

#[async_trait]
impl PaymentRepository for PgPayments {
    async fn list_by_loan(
        &self,
        loan_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Payment>, PortError> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments
             WHERE loan_id = $1
             ORDER BY payment_date DESC, id DESC
             LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, PaymentRow>(&query)
            .bind(loan_id)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| to_port_error(e, "payment", loan_id))?;

        Ok(rows.into_iter().map(Payment::from).collect())
    }

    async fn count_by_loan(&self, loan_id: i64) -> Result<i64, PortError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payments WHERE loan_id = $1")
            .bind(loan_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| to_port_error(e, "payment", loan_id))?;

        Ok(count)
    }
}
