//! Request orchestrator
//!
//! One operation per business call, each following the same template:
//! validate, hit the ports, map absence and failure to the envelope error
//! classes. Identifier parsing happens at the transport boundary, so every
//! method here already receives `i64` ids.

use std::sync::Arc;

use core_kernel::paging::{PageInfo, PageRequest, PageSlice};
use core_kernel::pricing::{self, Quote};
use core_kernel::ServiceError;

use crate::application::{ApplicationStatus, LoanApplication, NewApplication};
use crate::loan::Loan;
use crate::payment::Payment;
use crate::ports::{ApplicationRepository, LoanRepository, PaymentRepository, VehiclePartner};
use crate::vehicle::Vehicle;

/// A page of records plus the pagination echo
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: PageInfo,
}

/// Per-request business logic over the storage and partner ports
#[derive(Clone)]
pub struct LendingService {
    applications: Arc<dyn ApplicationRepository>,
    loans: Arc<dyn LoanRepository>,
    payments: Arc<dyn PaymentRepository>,
    partner: Arc<dyn VehiclePartner>,
}

impl LendingService {
    pub fn new(
        applications: Arc<dyn ApplicationRepository>,
        loans: Arc<dyn LoanRepository>,
        payments: Arc<dyn PaymentRepository>,
        partner: Arc<dyn VehiclePartner>,
    ) -> Self {
        Self {
            applications,
            loans,
            payments,
            partner,
        }
    }

    /// Computes net price, monthly payment, and total amount. Pure
    /// delegation; only a non-positive term can fail.
    pub fn calculate(
        &self,
        price: i64,
        down_payment: i64,
        term_months: i32,
        margin_rate: f64,
    ) -> Result<Quote, ServiceError> {
        pricing::calculate(price, down_payment, term_months, margin_rate)
            .map_err(|err| ServiceError::invalid_argument(err.to_string()))
    }

    /// Creates an application and synchronously submits it to the partner.
    ///
    /// The status is forced to `NEW` regardless of caller input. If the
    /// partner submission fails after the local insert, the whole operation
    /// is reported as failed; there is no compensating rollback, so the
    /// local row stays behind. Retried creates can therefore duplicate the
    /// partner-side record.
    pub async fn create_application(
        &self,
        mut draft: NewApplication,
    ) -> Result<LoanApplication, ServiceError> {
        draft.status = ApplicationStatus::New;

        let created = self.applications.insert(draft).await.map_err(|err| {
            tracing::error!(error = %err, "application insert failed");
            ServiceError::internal("failed to create loan application")
        })?;

        if let Err(err) = self.partner.submit_application(&created).await {
            tracing::warn!(
                application_id = created.id,
                error = %err,
                "partner submission failed after local insert, no rollback performed"
            );
            return Err(ServiceError::internal("failed to create loan application"));
        }

        Ok(created)
    }

    pub async fn get_application(&self, id: i64) -> Result<LoanApplication, ServiceError> {
        self.applications
            .get(id)
            .await
            .map_err(|err| ServiceError::from_port(err, "application not found"))
    }

    pub async fn list_applications(
        &self,
        user_id: i64,
        page: Option<&PageRequest>,
    ) -> Result<PagedResult<LoanApplication>, ServiceError> {
        let total = self
            .applications
            .count_by_user(user_id)
            .await
            .map_err(|_| ServiceError::internal("failed to fetch loan applications"))?;

        if total == 0 {
            return Ok(PagedResult {
                items: Vec::new(),
                page: PageInfo::empty(page),
            });
        }

        let slice = PageSlice::resolve(page);
        let items = self
            .applications
            .list_by_user(user_id, slice.limit, slice.offset)
            .await
            .map_err(|_| ServiceError::internal("failed to fetch loan applications"))?;

        Ok(PagedResult {
            items,
            page: page_info(page, total)?,
        })
    }

    pub async fn get_loan(&self, id: i64) -> Result<Loan, ServiceError> {
        self.loans
            .get(id)
            .await
            .map_err(|err| ServiceError::from_port(err, "loan not found"))
    }

    pub async fn list_loans(
        &self,
        user_id: i64,
        page: Option<&PageRequest>,
    ) -> Result<PagedResult<Loan>, ServiceError> {
        let total = self
            .loans
            .count_by_user(user_id)
            .await
            .map_err(|_| ServiceError::internal("failed to fetch loans"))?;

        if total == 0 {
            return Ok(PagedResult {
                items: Vec::new(),
                page: PageInfo::empty(page),
            });
        }

        let slice = PageSlice::resolve(page);
        let items = self
            .loans
            .list_by_user(user_id, slice.limit, slice.offset)
            .await
            .map_err(|_| ServiceError::internal("failed to fetch loans"))?;

        Ok(PagedResult {
            items,
            page: page_info(page, total)?,
        })
    }

    pub async fn list_payments(
        &self,
        loan_id: i64,
        page: Option<&PageRequest>,
    ) -> Result<PagedResult<Payment>, ServiceError> {
        let total = self
            .payments
            .count_by_loan(loan_id)
            .await
            .map_err(|_| ServiceError::internal("failed to fetch payments"))?;

        if total == 0 {
            return Ok(PagedResult {
                items: Vec::new(),
                page: PageInfo::empty(page),
            });
        }

        let slice = PageSlice::resolve(page);
        let items = self
            .payments
            .list_by_loan(loan_id, slice.limit, slice.offset)
            .await
            .map_err(|_| ServiceError::internal("failed to fetch payments"))?;

        Ok(PagedResult {
            items,
            page: page_info(page, total)?,
        })
    }

    /// Delegates directly to the partner; no pagination, nothing persisted.
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, ServiceError> {
        self.partner
            .list_vehicles()
            .await
            .map_err(|_| ServiceError::internal("failed to get vehicles"))
    }
}

fn page_info(page: Option<&PageRequest>, total: i64) -> Result<PageInfo, ServiceError> {
    PageInfo::for_count(page, total).map_err(|err| ServiceError::internal(err.to_string()))
}
