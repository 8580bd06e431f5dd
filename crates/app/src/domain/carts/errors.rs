//! Carts service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

use crate::domain::carts::models::{CartNameError, MAX_CARTS_PER_OWNER};

/// Unique index backing per-owner cart names.
const CART_NAME_CONSTRAINT: &str = "carts_owner_name_key";

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart name is required")]
    EmptyName,

    #[error("cart name is too long")]
    NameTooLong,

    #[error("a cart with this name already exists")]
    DuplicateName,

    /// A client-chosen cart or cart item uuid is already taken.
    #[error("identifier already in use")]
    AlreadyExists,

    #[error("owner already holds {max} carts", max = MAX_CARTS_PER_OWNER)]
    CartLimitExceeded,

    #[error("cart total exceeds the largest supported amount")]
    AmountOverflow,

    /// Cart, cart item or movie does not exist, or the cart belongs to
    /// another owner.
    #[error("not found")]
    NotFound,

    #[error("quantity must be at least one and fit the line")]
    InvalidQuantity,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        let kind = database_error.kind();
        let names_cart = database_error.constraint() == Some(CART_NAME_CONSTRAINT);

        match kind {
            ErrorKind::UniqueViolation if names_cart => Self::DuplicateName,
            ErrorKind::UniqueViolation => Self::AlreadyExists,
            ErrorKind::ForeignKeyViolation => Self::InvalidReference,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::CheckViolation => Self::InvalidData,
            ErrorKind::Other | _ => Self::Sql(error),
        }
    }
}

impl From<CartNameError> for CartsServiceError {
    fn from(error: CartNameError) -> Self {
        match error {
            CartNameError::Empty => Self::EmptyName,
            CartNameError::TooLong => Self::NameTooLong,
        }
    }
}
