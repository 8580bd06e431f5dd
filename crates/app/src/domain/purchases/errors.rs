//! Purchases service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::orders::models::NewOrderError;

#[derive(Debug, Error)]
pub enum PurchasesServiceError {
    /// The cart does not exist or belongs to another owner.
    #[error("cart not found")]
    NotFound,

    #[error("cart has no items")]
    EmptyCart,

    /// The cart total does not fit the amount type; nothing was recorded.
    #[error("order total exceeds the largest supported amount")]
    AmountOverflow,

    /// The purchase failed after it started writing; nothing was kept.
    #[error("purchase failed and was rolled back")]
    Transaction(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PurchasesServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            error => Self::Sql(error),
        }
    }
}

impl From<NewOrderError> for PurchasesServiceError {
    fn from(error: NewOrderError) -> Self {
        match error {
            NewOrderError::EmptyCart => Self::EmptyCart,
            NewOrderError::AmountOverflow => Self::AmountOverflow,
        }
    }
}
