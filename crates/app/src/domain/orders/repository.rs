//! Orders Repository

use std::collections::HashMap;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{encode_amount, encode_quantity, try_get_amount, try_get_quantity},
    domain::{
        carts::models::CartUuid,
        movies::models::MovieUuid,
        orders::models::{NewOrder, NewOrderLine, Order, OrderLine, OrderLineUuid, OrderUuid},
        owners::OwnerUuid,
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_LINE_SQL: &str = include_str!("sql/create_order_line.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const GET_ORDER_LINES_SQL: &str = include_str!("sql/get_order_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        order: &NewOrder,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(owner.into_uuid())
            .bind(order.cart_uuid.into_uuid())
            .bind(encode_amount("total", order.total)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        line: &NewOrderLine,
    ) -> Result<OrderLine, sqlx::Error> {
        query_as::<Postgres, OrderLine>(CREATE_ORDER_LINE_SQL)
            .bind(line.uuid.into_uuid())
            .bind(order.into_uuid())
            .bind(line.movie_uuid.into_uuid())
            .bind(encode_quantity("quantity", line.quantity)?)
            .bind(encode_amount("price", line.price)?)
            .fetch_one(&mut **tx)
            .await
    }

    /// Orders of `owner`, newest first, with their lines.
    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let mut orders = query_as::<Postgres, Order>(LIST_ORDERS_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        self.attach_lines(tx, &mut orders).await?;

        Ok(orders)
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        order: OrderUuid,
    ) -> Result<Order, sqlx::Error> {
        let found = query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(owner.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        let mut orders = vec![found];

        self.attach_lines(tx, &mut orders).await?;

        orders.pop().ok_or(sqlx::Error::RowNotFound)
    }

    async fn attach_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &mut [Order],
    ) -> Result<(), sqlx::Error> {
        if orders.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let lines = query_as::<Postgres, OrderLine>(GET_ORDER_LINES_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await?;

        let mut by_order: HashMap<OrderUuid, Vec<OrderLine>> = HashMap::new();

        for line in lines {
            by_order.entry(line.order_uuid).or_default().push(line);
        }

        for order in orders {
            order.lines = by_order.remove(&order.uuid).unwrap_or_default();
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            owner_uuid: OwnerUuid::from_uuid(row.try_get("owner_uuid")?),
            cart_uuid: row
                .try_get::<Option<Uuid>, _>("cart_uuid")?
                .map(CartUuid::from_uuid),
            total: try_get_amount(row, "total")?,
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderLineUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            movie_uuid: MovieUuid::from_uuid(row.try_get("movie_uuid")?),
            quantity: try_get_quantity(row, "quantity")?,
            price: try_get_amount(row, "price")?,
        })
    }
}
