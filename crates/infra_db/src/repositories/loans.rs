//! Loan repository (read-only)
//!
//! Several loan columns are nullable in the schema; they map to `Option`
//! on the row type and collapse to explicit zero values in the domain
//! record, field by field.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::PortError;
use domain_lending::ports::LoanRepository;
use domain_lending::Loan;

use crate::error::to_port_error;

/// PostgreSQL adapter for [`LoanRepository`]
#[derive(Debug, Clone)]
pub struct PgLoans {
    pool: PgPool,
}

impl PgLoans {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LoanRow {
    id: i64,
    application_id: i64,
    user_id: i64,
    currency_code: String,
    vehicle_vin: Option<String>,
    amount: Option<i64>,
    term_months: Option<i32>,
    monthly_payment: Option<i64>,
    remaining_balance: Option<i64>,
    status: String,
    created_at: Option<DateTime<Utc>>,
}

impl From<LoanRow> for Loan {
    fn from(row: LoanRow) -> Self {
        Loan {
            id: row.id,
            application_id: row.application_id,
            user_id: row.user_id,
            currency_code: row.currency_code,
            vehicle_vin: row.vehicle_vin.unwrap_or_default(),
            amount: row.amount.unwrap_or_default(),
            term_months: row.term_months.unwrap_or_default(),
            monthly_payment: row.monthly_payment.unwrap_or_default(),
            remaining_balance: row.remaining_balance.unwrap_or_default(),
            status: row.status,
            created_at: row.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

const COLUMNS: &str = "id, application_id, user_id, currency_code, vehicle_vin, \
     amount, term_months, monthly_payment, remaining_balance, status, created_at";

#[async_trait]
impl LoanRepository for PgLoans {
    async fn get(&self, id: i64) -> Result<Loan, PortError> {
        let query = format!("SELECT {COLUMNS} FROM loans WHERE id = $1");

        let row = sqlx::query_as::<_, LoanRow>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| to_port_error(e, "loan", id))?;

        Ok(row.into())
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Loan>, PortError> {
        let query = format!(
            "SELECT {COLUMNS} FROM loans
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, LoanRow>(&query)
            .bind(user_id)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| to_port_error(e, "loan", user_id))?;

        Ok(rows.into_iter().map(Loan::from).collect())
    }

    async fn count_by_user(&self, user_id: i64) -> Result<i64, PortError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM loans WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| to_port_error(e, "loan", user_id))?;

        Ok(count)
    }
}
