//! Orders
//!
//! The order ledger: written once at purchase, read afterwards.

pub mod errors;
pub(crate) mod ledger;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
