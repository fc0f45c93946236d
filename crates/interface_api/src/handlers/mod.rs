//! Request handlers
//!
//! One module per operation family. Handlers parse boundary identifiers,
//! delegate to the orchestrator, and always answer HTTP 200 with the
//! status envelope carrying the outcome.

pub mod applications;
pub mod calculator;
pub mod health;
pub mod loans;
pub mod payments;
pub mod vehicles;
