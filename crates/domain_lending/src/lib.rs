//! Lending Domain
//!
//! Domain records for the auto-financing business (applications, loans,
//! payments, partner-sourced vehicles), the port traits adapters implement,
//! and the [`service::LendingService`] orchestrator that ties them together.
//!
//! All records are value types produced fresh per request; there is no
//! in-process caching or shared mutable state. Application status changes
//! after creation happen out-of-band, so no transition logic lives here.

pub mod application;
pub mod loan;
pub mod payment;
pub mod ports;
pub mod service;
pub mod vehicle;

pub use application::{ApplicationKind, ApplicationStatus, LoanApplication, NewApplication};
pub use loan::Loan;
pub use payment::Payment;
pub use ports::{ApplicationRepository, LoanRepository, PaymentRepository, VehiclePartner};
pub use service::{LendingService, PagedResult};
pub use vehicle::Vehicle;
