//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// The order does not exist or belongs to another owner.
    #[error("order not found")]
    NotFound,

    /// A stored line's price times quantity does not fit the amount type.
    #[error("order line subtotal exceeds the largest supported amount")]
    AmountOverflow,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            error => Self::Sql(error),
        }
    }
}
