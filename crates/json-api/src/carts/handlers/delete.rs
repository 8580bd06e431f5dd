//! Delete Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*};

/// Delete Cart Handler
///
/// Orders placed from the cart are kept.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(cart, depot),
    fields(
        owner_uuid = tracing::field::Empty,
        cart_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;
    let cart = cart.into_inner();

    let span = tracing::Span::current();

    span.record("owner_uuid", tracing::field::display(owner));
    span.record("cart_uuid", tracing::field::display(cart));

    app.carts
        .delete_cart(owner, cart.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart_uuid = %cart, "deleted cart");

    Ok(StatusCode::NO_CONTENT)
}
