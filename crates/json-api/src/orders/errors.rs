//! Errors

use salvo::http::StatusError;
use tracing::error;

use reelcart_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::AmountOverflow => {
            error!("stored order line subtotal is out of range");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
