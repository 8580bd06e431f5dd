//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    carts::models::{Cart, CartUuid, NewCart},
    owners::OwnerUuid,
};

const LOCK_OWNER_CARTS_SQL: &str = include_str!("../sql/lock_owner_carts.sql");
const COUNT_CARTS_SQL: &str = include_str!("../sql/count_carts.sql");
const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const LIST_CARTS_SQL: &str = include_str!("../sql/list_carts.sql");
const GET_CART_SQL: &str = include_str!("../sql/get_cart.sql");
const LOCK_CART_SQL: &str = include_str!("../sql/lock_cart.sql");
const TOUCH_CART_SQL: &str = include_str!("../sql/touch_cart.sql");
const DELETE_CART_SQL: &str = include_str!("../sql/delete_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Serialises cart creation per owner until the transaction ends.
    pub(crate) async fn lock_owner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_OWNER_CARTS_SQL)
            .bind(owner.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn count_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_CARTS_SQL)
            .bind(owner.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        cart: NewCart,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(CREATE_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(owner.into_uuid())
            .bind(cart.name)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
    ) -> Result<Vec<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(LIST_CARTS_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(GET_CART_SQL)
            .bind(cart.into_uuid())
            .bind(owner.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Like [`Self::get_cart`], but holds a row lock on the cart until the
    /// transaction ends. Every mutation of a cart's lines goes through here
    /// first.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(LOCK_CART_SQL)
            .bind(cart.into_uuid())
            .bind(owner.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn touch_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<(), sqlx::Error> {
        query(TOUCH_CART_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(owner.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            owner_uuid: OwnerUuid::from_uuid(row.try_get("owner_uuid")?),
            name: row.try_get("name")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
