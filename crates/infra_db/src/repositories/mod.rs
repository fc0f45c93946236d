//! Repository adapters, one per entity

pub mod applications;
pub mod loans;
pub mod payments;

pub use applications::PgApplications;
pub use loans::PgLoans;
pub use payments::PgPayments;
