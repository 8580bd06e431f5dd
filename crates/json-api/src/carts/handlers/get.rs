//! Get Cart Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reelcart_app::domain::carts::{
    CartsServiceError,
    models::{Cart, CartItem},
};

use crate::{carts::errors::into_status_error, extensions::*};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The cart name, unique per owner
    pub name: String,

    /// The lines in the cart
    pub items: Vec<CartItemResponse>,

    /// Sum of quoted price times quantity, in minor currency units
    pub total: u64,

    /// Sum of quantities
    pub item_count: u64,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last changed
    pub updated_at: String,
}

impl TryFrom<Cart> for CartResponse {
    type Error = CartsServiceError;

    fn try_from(cart: Cart) -> Result<Self, Self::Error> {
        let total = cart.total().ok_or(CartsServiceError::AmountOverflow)?;
        let item_count = cart.item_count();

        Ok(CartResponse {
            uuid: cart.uuid.into_uuid(),
            name: cart.name,
            items: cart
                .items
                .into_iter()
                .map(CartItemResponse::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            total,
            item_count,
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        })
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    /// The movie on this line
    pub movie_uuid: Uuid,

    pub quantity: u32,

    /// Unit price quoted when the movie was first added
    pub price: u64,

    /// Quoted price times quantity
    pub subtotal: u64,

    pub created_at: String,

    pub updated_at: String,
}

impl TryFrom<CartItem> for CartItemResponse {
    type Error = CartsServiceError;

    fn try_from(item: CartItem) -> Result<Self, Self::Error> {
        let subtotal = item.subtotal().ok_or(CartsServiceError::AmountOverflow)?;

        Ok(Self {
            uuid: item.uuid.into_uuid(),
            movie_uuid: item.movie_uuid.into_uuid(),
            quantity: item.quantity,
            price: item.price,
            subtotal,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        })
    }
}

/// Get Cart Handler
///
/// Returns a cart with its lines and totals.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart total out of range"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    let cart = app
        .carts
        .get_cart(owner, cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    CartResponse::try_from(cart)
        .map(Json)
        .map_err(into_status_error)
}
