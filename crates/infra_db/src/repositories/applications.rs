//! Loan application repository
//!
//! Identifiers are generated by the database; inserts return the stored
//! row so callers always see the assigned id and timestamps.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;

use core_kernel::PortError;
use domain_lending::ports::ApplicationRepository;
use domain_lending::{ApplicationKind, ApplicationStatus, LoanApplication, NewApplication};

use crate::error::to_port_error;

/// PostgreSQL adapter for [`ApplicationRepository`]
#[derive(Debug, Clone)]
pub struct PgApplications {
    pool: PgPool,
}

impl PgApplications {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: i64,
    user_id: i64,
    kind: String,
    vehicle_vin: Option<String>,
    vehicle_name: Option<String>,
    currency_code: String,
    price: i64,
    down_payment: i64,
    net_price: i64,
    margin_rate: f64,
    term_months: i32,
    monthly_payment: i64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ApplicationRow {
    fn into_domain(self) -> Result<LoanApplication, PortError> {
        let kind = ApplicationKind::from_str(&self.kind)
            .map_err(|e| PortError::unavailable(format!("bad application kind: {e}")))?;
        let status = ApplicationStatus::from_str(&self.status)
            .map_err(|e| PortError::unavailable(format!("bad application status: {e}")))?;

        Ok(LoanApplication {
            id: self.id,
            user_id: self.user_id,
            kind,
            vehicle_vin: self.vehicle_vin,
            vehicle_name: self.vehicle_name,
            currency_code: self.currency_code,
            price: self.price,
            down_payment: self.down_payment,
            net_price: self.net_price,
            margin_rate: self.margin_rate,
            term_months: self.term_months,
            monthly_payment: self.monthly_payment,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const COLUMNS: &str = "id, user_id, kind, vehicle_vin, vehicle_name, currency_code, \
     price, down_payment, net_price, margin_rate, term_months, monthly_payment, \
     status, created_at, updated_at";

#[async_trait]
impl ApplicationRepository for PgApplications {
    async fn insert(&self, application: NewApplication) -> Result<LoanApplication, PortError> {
        let query = format!(
            "INSERT INTO loan_applications (
                user_id, kind, vehicle_vin, vehicle_name, currency_code,
                price, down_payment, net_price, margin_rate, term_months,
                monthly_payment, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, now(), now())
            RETURNING {COLUMNS}"
        );

        let row = sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(application.user_id)
            .bind(application.kind.as_str())
            .bind(&application.vehicle_vin)
            .bind(&application.vehicle_name)
            .bind(&application.currency_code)
            .bind(application.price)
            .bind(application.down_payment)
            .bind(application.net_price)
            .bind(application.margin_rate)
            .bind(application.term_months)
            .bind(application.monthly_payment)
            .bind(application.status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| to_port_error(e, "application", application.user_id))?;

        row.into_domain()
    }

    async fn get(&self, id: i64) -> Result<LoanApplication, PortError> {
        let query = format!("SELECT {COLUMNS} FROM loan_applications WHERE id = $1");

        let row = sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| to_port_error(e, "application", id))?;

        row.into_domain()
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<LoanApplication>, PortError> {
        let query = format!(
            "SELECT {COLUMNS} FROM loan_applications
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, ApplicationRow>(&query)
            .bind(user_id)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| to_port_error(e, "application", user_id))?;

        rows.into_iter().map(ApplicationRow::into_domain).collect()
    }

    async fn count_by_user(&self, user_id: i64) -> Result<i64, PortError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM loan_applications WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| to_port_error(e, "application", user_id))?;

        Ok(count)
    }
}
