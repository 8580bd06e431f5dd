//! Clear Cart Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*};

/// Cart Cleared Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartClearedResponse {
    /// Number of lines removed
    pub removed: u64,
}

/// Clear Cart Handler
///
/// Removes every line; the cart itself stays.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart emptied"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartClearedResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    let removed = app
        .items
        .clear(owner, cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartClearedResponse { removed }))
}
