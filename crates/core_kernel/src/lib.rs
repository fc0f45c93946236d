//! Core Kernel - Foundational types for the auto-lending service
//!
//! This crate provides the building blocks shared by all other crates:
//! - Loan pricing arithmetic (net price, margin, monthly payment)
//! - Pagination resolution (page/limit to limit/offset, total-page math)
//! - Boundary identifier parsing (decimal strings to `i64`)
//! - The service error taxonomy behind the response envelope codes

pub mod error;
pub mod identifiers;
pub mod paging;
pub mod ports;
pub mod pricing;

pub use error::ServiceError;
pub use identifiers::{encode_id, parse_id};
pub use paging::{total_pages, PageInfo, PageRequest, PageSlice, PagingError};
pub use ports::PortError;
pub use pricing::{calculate, PricingError, Quote};
