//! Purchases service.
//!
//! Turns a cart into an order. The whole purchase is one transaction: the
//! cart row is locked, its lines are copied into the ledger, then removed
//! from the cart. If anything fails after the lock, the transaction is
//! dropped uncommitted and the cart is left exactly as it was.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::{
            models::CartUuid,
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        orders::{
            ledger::PgOrderLedger,
            models::{NewOrder, Order},
        },
        owners::OwnerUuid,
        purchases::errors::PurchasesServiceError,
    },
};

#[derive(Debug, Clone)]
pub struct PgPurchasesService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    ledger: PgOrderLedger,
}

impl PgPurchasesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            ledger: PgOrderLedger::new(),
        }
    }

    async fn place_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        order: &NewOrder,
    ) -> Result<Order, sqlx::Error> {
        let recorded = self.ledger.record(tx, owner, order).await?;

        self.items_repository
            .delete_cart_items(tx, order.cart_uuid)
            .await?;

        self.carts_repository.touch_cart(tx, order.cart_uuid).await?;

        Ok(recorded)
    }
}

#[async_trait]
impl PurchasesService for PgPurchasesService {
    #[tracing::instrument(
        name = "purchases.service.purchase",
        skip(self),
        fields(owner_uuid = %owner, cart_uuid = %cart),
        err
    )]
    async fn purchase(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<Order, PurchasesServiceError> {
        let mut tx = self.db.begin().await?;

        self.carts_repository.lock_cart(&mut tx, owner, cart).await?;

        let items = self.items_repository.get_cart_items(&mut tx, cart).await?;

        let order = NewOrder::from_cart_items(cart, &items)?;

        let recorded = self
            .place_order(&mut tx, owner, &order)
            .await
            .map_err(PurchasesServiceError::Transaction)?;

        tx.commit()
            .await
            .map_err(PurchasesServiceError::Transaction)?;

        info!(
            order_uuid = %recorded.uuid,
            total = recorded.total,
            line_count = recorded.lines.len(),
            "placed order"
        );

        Ok(recorded)
    }
}

#[automock]
#[async_trait]
pub trait PurchasesService: Send + Sync {
    /// Buys everything in the cart.
    ///
    /// Records an order whose lines copy the cart lines' movie, quantity and
    /// quoted price, then empties the cart. The cart itself is kept and can
    /// be filled again.
    async fn purchase(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<Order, PurchasesServiceError>;
}
