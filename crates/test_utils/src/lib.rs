//! Test Utilities
//!
//! Record builders with sensible defaults and in-memory mock ports that
//! record how they were called, so orchestrator and handler tests can
//! assert both outcomes and interaction patterns (e.g. that a zero count
//! short-circuits the paged fetch).

pub mod builders;
pub mod mocks;

pub use builders::{application, loan, new_application, payment, vehicle};
pub use mocks::{MockApplications, MockLoans, MockPartner, MockPayments};
