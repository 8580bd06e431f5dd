//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        orders::{
            errors::OrdersServiceError,
            models::{Order, OrderUuid},
            repository::PgOrdersRepository,
        },
        owners::OwnerUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.list_orders",
        skip(self),
        fields(owner_uuid = %owner),
        err
    )]
    async fn list_orders(&self, owner: OwnerUuid) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(orders)
    }

    #[tracing::instrument(
        name = "orders.service.get_order",
        skip(self),
        fields(owner_uuid = %owner, order_uuid = %order),
        err
    )]
    async fn get_order(
        &self,
        owner: OwnerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self.repository.get_order(&mut tx, owner, order).await?;

        tx.commit().await?;

        Ok(found)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Orders placed by `owner`, newest first.
    async fn list_orders(&self, owner: OwnerUuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order with its lines.
    async fn get_order(
        &self,
        owner: OwnerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;
}
