//! Errors

use salvo::http::StatusError;
use tracing::error;

use reelcart_app::domain::purchases::PurchasesServiceError;

pub(crate) fn into_status_error(error: PurchasesServiceError) -> StatusError {
    match error {
        PurchasesServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        PurchasesServiceError::EmptyCart => StatusError::conflict().brief("Cart is empty"),
        PurchasesServiceError::AmountOverflow => StatusError::unprocessable_entity()
            .brief("Cart total exceeds the largest supported amount"),
        PurchasesServiceError::Transaction(source) => {
            error!("purchase rolled back: {source}");

            StatusError::internal_server_error()
        }
        PurchasesServiceError::Sql(source) => {
            error!("purchase storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
