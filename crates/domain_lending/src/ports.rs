//! Port traits the infrastructure adapters implement
//!
//! The orchestrator only ever talks to these traits; the database adapters
//! live in `infra_db` and the partner HTTP clients in `infra_partners`.
//! Every operation reports failures through [`PortError`], with `NotFound`
//! reserved for "the record does not exist".

use async_trait::async_trait;

use core_kernel::PortError;

use crate::application::{LoanApplication, NewApplication};
use crate::loan::Loan;
use crate::payment::Payment;
use crate::vehicle::Vehicle;

/// Storage for loan applications
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Inserts a new application and returns the stored record with its
    /// generated id and timestamps.
    async fn insert(&self, application: NewApplication) -> Result<LoanApplication, PortError>;

    async fn get(&self, id: i64) -> Result<LoanApplication, PortError>;

    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<LoanApplication>, PortError>;

    async fn count_by_user(&self, user_id: i64) -> Result<i64, PortError>;
}

/// Storage for loans (read-only in this service)
#[async_trait]
pub trait LoanRepository: Send + Sync {
    async fn get(&self, id: i64) -> Result<Loan, PortError>;

    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Loan>, PortError>;

    async fn count_by_user(&self, user_id: i64) -> Result<i64, PortError>;
}

/// Storage for payments (read-only in this service)
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn list_by_loan(
        &self,
        loan_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Payment>, PortError>;

    async fn count_by_loan(&self, loan_id: i64) -> Result<i64, PortError>;
}

/// The vehicle inventory / application-intake partner
#[async_trait]
pub trait VehiclePartner: Send + Sync {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError>;

    /// Submits a created application to the partner. A failure here fails
    /// the create operation as a whole.
    async fn submit_application(&self, application: &LoanApplication) -> Result<(), PortError>;
}
