//! Database Infrastructure
//!
//! PostgreSQL adapters for the lending domain ports, built on SQLx with
//! runtime-checked queries. Provides pool configuration/creation and one
//! repository per entity.

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use repositories::{PgApplications, PgLoans, PgPayments};
