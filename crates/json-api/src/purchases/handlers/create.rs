//! Purchase Cart Handler

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{self, get::OrderResponse},
    purchases::errors::into_status_error,
};

/// Purchase Cart Handler
///
/// Turns every line of the cart into an order and empties the cart.
#[endpoint(
    tags("purchases"),
    summary = "Purchase Cart",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::CONFLICT, description = "Cart is empty"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart total out of range"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Purchase failed and was rolled back"),
    ),
)]
#[tracing::instrument(
    name = "purchases.create",
    skip(cart, depot, res),
    fields(
        owner_uuid = tracing::field::Empty,
        cart_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;
    let cart = cart.into_inner();

    let span = tracing::Span::current();

    span.record("owner_uuid", tracing::field::display(owner));
    span.record("cart_uuid", tracing::field::display(cart));

    let order = app
        .purchases
        .purchase(owner, cart.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    OrderResponse::try_from(order)
        .map(Json)
        .map_err(orders::errors::into_status_error)
}
