//! Cart Models

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{movies::models::MovieUuid, owners::OwnerUuid},
    uuids::TypedUuid,
};

/// Maximum number of carts a single owner may hold.
pub const MAX_CARTS_PER_OWNER: u64 = 3;

/// Maximum length of a cart name, in characters.
pub const MAX_CART_NAME_LENGTH: usize = 100;

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Model
#[derive(Debug, Clone)]
pub struct Cart {
    pub uuid: CartUuid,
    pub owner_uuid: OwnerUuid,
    pub name: String,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    /// Sum of unit price snapshot times quantity over every line. `None`
    /// when the sum does not fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        items_total(&self.items)
    }

    /// Sum of quantities over every line.
    pub fn item_count(&self) -> u64 {
        items_count(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// New Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub uuid: CartUuid,
    pub name: String,
}

/// A validated cart name: trimmed, non-blank, at most
/// [`MAX_CART_NAME_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartName(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartNameError {
    #[error("cart name is required")]
    Empty,

    #[error("cart name is longer than {max} characters", max = MAX_CART_NAME_LENGTH)]
    TooLong,
}

impl CartName {
    pub fn parse(raw: &str) -> Result<Self, CartNameError> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(CartNameError::Empty);
        }

        if name.chars().count() > MAX_CART_NAME_LENGTH {
            return Err(CartNameError::TooLong);
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// A cart line: one per movie per cart.
///
/// `price` is the unit price quoted when the movie was first added. Adding
/// the same movie again only raises `quantity`; the quote is never refreshed
/// from the catalog while the line exists.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub cart_uuid: CartUuid,
    pub movie_uuid: MovieUuid,
    pub quantity: u32,
    pub price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartItem {
    /// Quoted price times quantity, `None` on overflow.
    pub fn subtotal(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }
}

/// New Cart Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub movie_uuid: MovieUuid,
    pub quantity: u32,
}

/// Requested quantity change for an existing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    Set(u32),
    Remove,
}

impl QuantityUpdate {
    /// Zero or negative quantities remove the line; anything else replaces
    /// the quantity. Values beyond `u32::MAX` are `None`.
    pub fn from_requested(quantity: i64) -> Option<Self> {
        if quantity <= 0 {
            return Some(Self::Remove);
        }

        u32::try_from(quantity).ok().map(Self::Set)
    }
}

/// Result of [`QuantityUpdate`] being applied.
#[derive(Debug, Clone)]
pub enum CartItemUpdate {
    Updated(CartItem),
    Removed,
}

pub fn items_total(items: &[CartItem]) -> Option<u64> {
    items
        .iter()
        .try_fold(0_u64, |total, item| total.checked_add(item.subtotal()?))
}

pub fn items_count(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}
