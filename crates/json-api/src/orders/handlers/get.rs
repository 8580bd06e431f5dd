//! Get Order Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reelcart_app::domain::{
    carts::models::CartUuid,
    orders::{
        OrdersServiceError,
        models::{Order, OrderLine},
    },
};

use crate::{extensions::*, orders::errors::into_status_error};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,

    /// The cart the order was bought from; null once that cart is deleted
    pub cart_uuid: Option<Uuid>,

    /// Sum of line subtotals at purchase time
    pub total: u64,

    pub lines: Vec<OrderLineResponse>,

    pub created_at: String,
}

impl TryFrom<Order> for OrderResponse {
    type Error = OrdersServiceError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: order.uuid.into_uuid(),
            cart_uuid: order.cart_uuid.map(CartUuid::into_uuid),
            total: order.total,
            lines: order
                .lines
                .into_iter()
                .map(OrderLineResponse::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            created_at: order.created_at.to_string(),
        })
    }
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    pub uuid: Uuid,

    pub movie_uuid: Uuid,

    pub quantity: u32,

    /// Unit price paid
    pub price: u64,

    pub subtotal: u64,
}

impl TryFrom<OrderLine> for OrderLineResponse {
    type Error = OrdersServiceError;

    fn try_from(line: OrderLine) -> Result<Self, Self::Error> {
        let subtotal = line.subtotal().ok_or(OrdersServiceError::AmountOverflow)?;

        Ok(Self {
            uuid: line.uuid.into_uuid(),
            movie_uuid: line.movie_uuid.into_uuid(),
            quantity: line.quantity,
            price: line.price,
            subtotal,
        })
    }
}

/// Get Order Handler
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    let order = app
        .orders
        .get_order(owner, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    OrderResponse::try_from(order)
        .map(Json)
        .map_err(into_status_error)
}
