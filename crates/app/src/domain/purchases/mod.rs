//! Purchases

pub mod errors;
pub mod service;

pub use errors::PurchasesServiceError;
pub use service::*;
