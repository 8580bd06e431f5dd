//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartName, CartUuid, MAX_CARTS_PER_OWNER, NewCart},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        owners::OwnerUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    #[tracing::instrument(
        name = "carts.service.create_cart",
        skip(self, cart),
        fields(owner_uuid = %owner, cart_uuid = %cart.uuid),
        err
    )]
    async fn create_cart(
        &self,
        owner: OwnerUuid,
        cart: NewCart,
    ) -> Result<Cart, CartsServiceError> {
        let name = CartName::parse(&cart.name)?;

        let mut tx = self.db.begin().await?;

        self.carts_repository.lock_owner(&mut tx, owner).await?;

        let count = self.carts_repository.count_carts(&mut tx, owner).await?;

        if count >= MAX_CARTS_PER_OWNER {
            return Err(CartsServiceError::CartLimitExceeded);
        }

        let created = self
            .carts_repository
            .create_cart(
                &mut tx,
                owner,
                NewCart {
                    uuid: cart.uuid,
                    name: name.as_str().to_string(),
                },
            )
            .await?;

        tx.commit().await?;

        info!(cart_uuid = %created.uuid, "created cart");

        Ok(created)
    }

    #[tracing::instrument(
        name = "carts.service.list_carts",
        skip(self),
        fields(owner_uuid = %owner),
        err
    )]
    async fn list_carts(&self, owner: OwnerUuid) -> Result<Vec<Cart>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut carts = self.carts_repository.list_carts(&mut tx, owner).await?;

        for cart in &mut carts {
            cart.items = self
                .items_repository
                .get_cart_items(&mut tx, cart.uuid)
                .await?;
        }

        tx.commit().await?;

        Ok(carts)
    }

    #[tracing::instrument(
        name = "carts.service.get_cart",
        skip(self),
        fields(owner_uuid = %owner, cart_uuid = %cart),
        err
    )]
    async fn get_cart(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut found = self.carts_repository.get_cart(&mut tx, owner, cart).await?;

        found.items = self.items_repository.get_cart_items(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(found)
    }

    #[tracing::instrument(
        name = "carts.service.delete_cart",
        skip(self),
        fields(owner_uuid = %owner, cart_uuid = %cart),
        err
    )]
    async fn delete_cart(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .carts_repository
            .delete_cart(&mut tx, owner, cart)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        info!("deleted cart");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a named cart for `owner`.
    ///
    /// The name is trimmed first. An owner may hold at most
    /// [`MAX_CARTS_PER_OWNER`] carts; that ceiling is checked before the name
    /// is checked for uniqueness.
    async fn create_cart(
        &self,
        owner: OwnerUuid,
        cart: NewCart,
    ) -> Result<Cart, CartsServiceError>;

    /// All carts of `owner`, oldest first, each with its lines.
    async fn list_carts(&self, owner: OwnerUuid) -> Result<Vec<Cart>, CartsServiceError>;

    /// Retrieve a single cart with its lines. Carts of other owners are
    /// reported as not found.
    async fn get_cart(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Deletes a cart and its lines. Orders placed from it are kept.
    async fn delete_cart(
        &self,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<(), CartsServiceError>;
}
