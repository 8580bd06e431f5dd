//! Order Ledger
//!
//! Append-only. Orders are written here and nowhere else, always inside the
//! caller's transaction so the purchase that produced them commits or rolls
//! back as one unit.

use sqlx::{Postgres, Transaction};
use tracing::debug;

use crate::domain::{
    orders::{
        models::{NewOrder, Order},
        repository::PgOrdersRepository,
    },
    owners::OwnerUuid,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderLedger {
    repository: PgOrdersRepository,
}

impl PgOrderLedger {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            repository: PgOrdersRepository::new(),
        }
    }

    /// Writes the order header followed by one row per line.
    pub(crate) async fn record(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: OwnerUuid,
        order: &NewOrder,
    ) -> Result<Order, sqlx::Error> {
        let mut recorded = self.repository.create_order(tx, owner, order).await?;

        recorded.lines.reserve(order.lines.len());

        for line in &order.lines {
            let line = self
                .repository
                .create_order_line(tx, recorded.uuid, line)
                .await?;

            recorded.lines.push(line);
        }

        debug!(
            order_uuid = %recorded.uuid,
            line_count = recorded.lines.len(),
            "recorded order"
        );

        Ok(recorded)
    }
}
