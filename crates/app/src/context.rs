//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartItemsService, CartsService, PgCartItemsService, PgCartsService},
        movies::{CatalogService, PgCatalogService},
        orders::{OrdersService, PgOrdersService},
        purchases::{PgPurchasesService, PurchasesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub items: Arc<dyn CartItemsService>,
    pub purchases: Arc<dyn PurchasesService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails, or
    /// when `run_migrations` is set and a migration fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::from_db(&Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            catalog: Arc::new(PgCatalogService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            items: Arc::new(PgCartItemsService::new(db.clone())),
            purchases: Arc::new(PgPurchasesService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
        }
    }
}
