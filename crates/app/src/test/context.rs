//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        carts::{PgCartItemsService, PgCartsService},
        movies::PgCatalogService,
        orders::PgOrdersService,
        owners::OwnerUuid,
        purchases::PgPurchasesService,
    },
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub owner: OwnerUuid,
    pub catalog: PgCatalogService,
    pub carts: PgCartsService,
    pub items: PgCartItemsService,
    pub purchases: PgPurchasesService,
    pub orders: PgOrdersService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            owner: OwnerUuid::new(),
            catalog: PgCatalogService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            items: PgCartItemsService::new(db.clone()),
            purchases: PgPurchasesService::new(db.clone()),
            orders: PgOrdersService::new(db),
            db: test_db,
        }
    }
}
