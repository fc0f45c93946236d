//! Partner Infrastructure
//!
//! HTTP clients for the two external partner services and the message
//! broker connection. The vehicle inventory partner is the only one with
//! live traffic; the leasing partner and the broker are wired at startup
//! but carry no operations yet.

pub mod auto_market;
pub mod broker;
pub mod config;
pub mod leasing;

pub use auto_market::AutoMarketClient;
pub use broker::BrokerConfig;
pub use config::{PartnerConfig, PartnerError};
pub use leasing::LeasingClient;
