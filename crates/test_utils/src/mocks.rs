//! In-memory mock ports
//!
//! Each mock can be seeded with records, flipped into a failing state, and
//! counts how often its paged-fetch and count operations run.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::PortError;
use domain_lending::ports::{
    ApplicationRepository, LoanRepository, PaymentRepository, VehiclePartner,
};
use domain_lending::{Loan, LoanApplication, NewApplication, Payment, Vehicle};

fn unavailable() -> PortError {
    PortError::unavailable("mock failure")
}

/// Mock application storage
#[derive(Default)]
pub struct MockApplications {
    records: Mutex<Vec<LoanApplication>>,
    next_id: AtomicI64,
    /// When set, every operation fails with `Unavailable`
    pub fail: AtomicBool,
    pub list_calls: AtomicUsize,
    pub count_calls: AtomicUsize,
}

impl MockApplications {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    pub fn with_records(records: Vec<LoanApplication>) -> Self {
        let next = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            records: Mutex::new(records),
            next_id: AtomicI64::new(next),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<LoanApplication> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationRepository for MockApplications {
    async fn insert(&self, application: NewApplication) -> Result<LoanApplication, PortError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        let now = Utc::now();
        let stored = LoanApplication {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            user_id: application.user_id,
            kind: application.kind,
            vehicle_vin: application.vehicle_vin,
            vehicle_name: application.vehicle_name,
            currency_code: application.currency_code,
            price: application.price,
            down_payment: application.down_payment,
            net_price: application.net_price,
            margin_rate: application.margin_rate,
            term_months: application.term_months,
            monthly_payment: application.monthly_payment,
            status: application.status,
            created_at: now,
            updated_at: now,
        };
        self.records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<LoanApplication, PortError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("application", id))
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<LoanApplication>, PortError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_by_user(&self, user_id: i64) -> Result<i64, PortError> {
        self.count_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .count() as i64)
    }
}

/// Mock loan storage
#[derive(Default)]
pub struct MockLoans {
    records: Vec<Loan>,
    pub fail: AtomicBool,
    pub list_calls: AtomicUsize,
    pub count_calls: AtomicUsize,
}

impl MockLoans {
    pub fn with_records(records: Vec<Loan>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}

#[async_trait]
impl LoanRepository for MockLoans {
    async fn get(&self, id: i64) -> Result<Loan, PortError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("loan", id))
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Loan>, PortError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        Ok(self
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_by_user(&self, user_id: i64) -> Result<i64, PortError> {
        self.count_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        Ok(self.records.iter().filter(|r| r.user_id == user_id).count() as i64)
    }
}

/// Mock payment storage
#[derive(Default)]
pub struct MockPayments {
    records: Vec<Payment>,
    pub fail: AtomicBool,
    pub list_calls: AtomicUsize,
    pub count_calls: AtomicUsize,
}

impl MockPayments {
    pub fn with_records(records: Vec<Payment>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PaymentRepository for MockPayments {
    async fn list_by_loan(
        &self,
        loan_id: i64,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Payment>, PortError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        Ok(self
            .records
            .iter()
            .filter(|r| r.loan_id == loan_id)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_by_loan(&self, loan_id: i64) -> Result<i64, PortError> {
        self.count_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail.load(Ordering::Relaxed) {
            return Err(unavailable());
        }

        Ok(self.records.iter().filter(|r| r.loan_id == loan_id).count() as i64)
    }
}

/// Mock vehicle partner, recording every submitted application
#[derive(Default)]
pub struct MockPartner {
    pub vehicles: Vec<Vehicle>,
    pub fail_list: AtomicBool,
    pub fail_submit: AtomicBool,
    submitted: Mutex<Vec<LoanApplication>>,
}

impl MockPartner {
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles,
            ..Self::default()
        }
    }

    pub fn submitted(&self) -> Vec<LoanApplication> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl VehiclePartner for MockPartner {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError> {
        if self.fail_list.load(Ordering::Relaxed) {
            return Err(unavailable());
        }
        Ok(self.vehicles.clone())
    }

    async fn submit_application(&self, application: &LoanApplication) -> Result<(), PortError> {
        if self.fail_submit.load(Ordering::Relaxed) {
            return Err(unavailable());
        }
        self.submitted.lock().unwrap().push(application.clone());
        Ok(())
    }
}
