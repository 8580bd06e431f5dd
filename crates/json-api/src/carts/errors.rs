//! Errors

use salvo::http::StatusError;
use tracing::error;

use reelcart_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::EmptyName
        | CartsServiceError::NameTooLong
        | CartsServiceError::InvalidQuantity
        | CartsServiceError::AmountOverflow => {
            StatusError::unprocessable_entity().brief(error.to_string())
        }
        CartsServiceError::DuplicateName => {
            StatusError::conflict().brief("A cart with this name already exists")
        }
        CartsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Identifier already in use")
        }
        CartsServiceError::CartLimitExceeded => {
            StatusError::conflict().brief("Cart limit reached")
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Not found"),
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
