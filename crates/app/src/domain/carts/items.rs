//! Cart items service.
//!
//! Keeps one line per movie per cart. Every mutation locks the cart row
//! first, so it serialises with other line mutations and with purchase.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{
                CartItem, CartItemUpdate, CartItemUuid, CartUuid, NewCartItem, QuantityUpdate,
                items_count, items_total,
            },
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        movies::repository::PgMoviesRepository,
        owners::OwnerUuid,
    },
};

/// Largest quantity a single line can hold.
const MAX_LINE_QUANTITY: u32 = i32::MAX.unsigned_abs();

#[derive(Debug, Clone)]
pub struct PgCartItemsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    movies_repository: PgMoviesRepository,
}

impl PgCartItemsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            movies_repository: PgMoviesRepository::new(),
        }
    }
}

#[async_trait]
impl CartItemsService for PgCartItemsService {
    #[tracing::instrument(
        name = "carts.items.add_item",
        skip(self, item),
        fields(
            owner_uuid = %owner,
            cart_uuid = %cart,
            movie_uuid = %item.movie_uuid,
            quantity = item.quantity
        ),
        err
    )]
    async fn add_item(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError> {
        if item.quantity == 0 || item.quantity > MAX_LINE_QUANTITY {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        self.carts_repository.lock_cart(&mut tx, owner, cart).await?;

        let price = self
            .movies_repository
            .get_movie_price(&mut tx, item.movie_uuid)
            .await?;

        let existing = self
            .items_repository
            .find_cart_item_by_movie(&mut tx, cart, item.movie_uuid)
            .await?;

        if let Some(existing) = existing {
            let merged = existing.quantity.checked_add(item.quantity);

            if merged.is_none_or(|quantity| quantity > MAX_LINE_QUANTITY) {
                return Err(CartsServiceError::InvalidQuantity);
            }

            debug!(cart_item_uuid = %existing.uuid, "merging into existing line");
        }

        let saved = self
            .items_repository
            .upsert_cart_item(&mut tx, cart, item, price)
            .await?;

        self.carts_repository.touch_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(saved)
    }

    #[tracing::instrument(
        name = "carts.items.update_quantity",
        skip(self),
        fields(owner_uuid = %owner, cart_uuid = %cart, cart_item_uuid = %item),
        err
    )]
    async fn update_quantity(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<CartItemUpdate, CartsServiceError> {
        let update = QuantityUpdate::from_requested(quantity)
            .filter(|update| !matches!(update, QuantityUpdate::Set(q) if *q > MAX_LINE_QUANTITY))
            .ok_or(CartsServiceError::InvalidQuantity)?;

        let mut tx = self.db.begin().await?;

        self.carts_repository.lock_cart(&mut tx, owner, cart).await?;

        let outcome = match update {
            QuantityUpdate::Set(quantity) => {
                let updated = self
                    .items_repository
                    .update_quantity(&mut tx, cart, item, quantity)
                    .await?;

                CartItemUpdate::Updated(updated)
            }
            QuantityUpdate::Remove => {
                let rows_affected = self
                    .items_repository
                    .delete_cart_item(&mut tx, cart, item)
                    .await?;

                if rows_affected == 0 {
                    return Err(CartsServiceError::NotFound);
                }

                CartItemUpdate::Removed
            }
        };

        self.carts_repository.touch_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(outcome)
    }

    #[tracing::instrument(
        name = "carts.items.remove_item",
        skip(self),
        fields(owner_uuid = %owner, cart_uuid = %cart, cart_item_uuid = %item),
        err
    )]
    async fn remove_item(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts_repository.lock_cart(&mut tx, owner, cart).await?;

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, cart, item)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        self.carts_repository.touch_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "carts.items.clear",
        skip(self),
        fields(owner_uuid = %owner, cart_uuid = %cart),
        err
    )]
    async fn clear(&self, owner: OwnerUuid, cart: CartUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts_repository.lock_cart(&mut tx, owner, cart).await?;

        let removed = self.items_repository.delete_cart_items(&mut tx, cart).await?;

        self.carts_repository.touch_cart(&mut tx, cart).await?;

        tx.commit().await?;

        info!(removed, "cleared cart");

        Ok(removed)
    }

    async fn get_item(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<CartItem, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts_repository.get_cart(&mut tx, owner, cart).await?;

        let found = self.items_repository.get_cart_item(&mut tx, cart, item).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn get_total(&self, owner: OwnerUuid, cart: CartUuid) -> Result<u64, CartsServiceError> {
        let items = self.get_items(owner, cart).await?;

        items_total(&items).ok_or(CartsServiceError::AmountOverflow)
    }

    async fn get_item_count(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<u64, CartsServiceError> {
        let items = self.get_items(owner, cart).await?;

        Ok(items_count(&items))
    }
}

impl PgCartItemsService {
    async fn get_items(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<Vec<CartItem>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts_repository.get_cart(&mut tx, owner, cart).await?;

        let items = self.items_repository.get_cart_items(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(items)
    }
}

#[automock]
#[async_trait]
pub trait CartItemsService: Send + Sync {
    /// Adds `item.quantity` of a movie to the cart.
    ///
    /// A new line quotes the movie's current catalog price. If the cart
    /// already holds the movie, only the quantity grows: the first quoted
    /// price wins until the line is removed and added again.
    async fn add_item(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError>;

    /// Replaces a line's quantity. Zero or less removes the line.
    async fn update_quantity(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<CartItemUpdate, CartsServiceError>;

    async fn remove_item(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError>;

    /// Removes every line, returning how many were removed.
    async fn clear(&self, owner: OwnerUuid, cart: CartUuid) -> Result<u64, CartsServiceError>;

    async fn get_item(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
        item: CartItemUuid,
    ) -> Result<CartItem, CartsServiceError>;

    /// Sum of quoted price times quantity. `AmountOverflow` when the sum
    /// does not fit in a `u64`.
    async fn get_total(&self, owner: OwnerUuid, cart: CartUuid) -> Result<u64, CartsServiceError>;

    /// Sum of quantities.
    async fn get_item_count(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<u64, CartsServiceError>;
}
