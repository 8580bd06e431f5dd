//! Order Models

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{
        carts::models::{CartItem, CartUuid, items_total},
        movies::models::MovieUuid,
        owners::OwnerUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// An immutable record of a completed purchase.
///
/// `cart_uuid` is cleared when the cart the order was bought from is
/// deleted; the order and its lines stay.
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    pub owner_uuid: OwnerUuid,
    pub cart_uuid: Option<CartUuid>,
    pub total: u64,
    pub lines: Vec<OrderLine>,
    pub created_at: Timestamp,
}

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLine>;

/// Copy of a cart line as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub uuid: OrderLineUuid,
    pub order_uuid: OrderUuid,
    pub movie_uuid: MovieUuid,
    pub quantity: u32,
    pub price: u64,
}

impl OrderLine {
    /// Price times quantity, `None` on overflow.
    pub fn subtotal(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }
}

/// New Order Line Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub uuid: OrderLineUuid,
    pub movie_uuid: MovieUuid,
    pub quantity: u32,
    pub price: u64,
}

/// An order ready to be written to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub cart_uuid: CartUuid,
    pub total: u64,
    pub lines: Vec<NewOrderLine>,
}

/// Why a set of cart lines cannot become an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewOrderError {
    #[error("cart has no items")]
    EmptyCart,

    #[error("order total exceeds the largest supported amount")]
    AmountOverflow,
}

impl NewOrder {
    /// Snapshots cart lines into an order.
    pub fn from_cart_items(cart: CartUuid, items: &[CartItem]) -> Result<Self, NewOrderError> {
        if items.is_empty() {
            return Err(NewOrderError::EmptyCart);
        }

        let total = items_total(items).ok_or(NewOrderError::AmountOverflow)?;

        let lines = items
            .iter()
            .map(|item| NewOrderLine {
                uuid: OrderLineUuid::new(),
                movie_uuid: item.movie_uuid,
                quantity: item.quantity,
                price: item.price,
            })
            .collect();

        Ok(Self {
            uuid: OrderUuid::new(),
            cart_uuid: cart,
            total,
            lines,
        })
    }
}
