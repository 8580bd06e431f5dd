//! Per-test databases inside one shared PostgreSQL container.
//!
//! The container starts on first use and lives for the whole test binary.
//! Every [`TestDb`] creates its own database in it, applies the migrations
//! and queues the database for dropping when it goes out of scope.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query, query_scalar};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

use crate::database;

const DB_USER: &str = "reelcart_test";
const DB_PASSWORD: &str = "reelcart_test_password";

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

static DROP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Names are generated, never user input, but they are interpolated into
/// DDL so keep them to a safe alphabet anyway.
fn is_safe_database_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn unique_database_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    let seq = DB_COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("reelcart_test_{nanos}_{seq}")
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(DB_USER)
        .with_password(DB_PASSWORD)
        .with_db_name(DB_USER)
        .with_tag("16-alpine")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn database_url(db_name: &str) -> String {
    let container = POSTGRES_CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/{db_name}")
}

async fn start_drop_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(db_name) = receiver.recv().await {
            if let Err(error) = drop_database(&db_name).await {
                eprintln!("Failed to drop test database '{db_name}': {error}");
            }
        }
    });

    sender
}

async fn drop_database(db_name: &str) -> Result<(), sqlx::Error> {
    if !is_safe_database_name(db_name) {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&database_url("postgres").await).await?;

    query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// An isolated, migrated database.
///
/// Services commit normally; isolation comes from each test owning a fresh
/// database rather than from rolling anything back.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        DROP_SENDER.get_or_init(start_drop_task).await;

        let name = unique_database_name();

        assert!(is_safe_database_name(&name), "unsafe database name {name}");

        let mut admin = PgConnection::connect(&database_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin
            .close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&database_url(&name).await)
            .await
            .expect("Failed to create pool for test database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_are_safe_and_distinct() {
        let first = unique_database_name();
        let second = unique_database_name();

        assert!(is_safe_database_name(&first));
        assert!(is_safe_database_name(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn unsafe_names_are_rejected() {
        assert!(!is_safe_database_name(""));
        assert!(!is_safe_database_name("1starts_with_digit"));
        assert!(!is_safe_database_name("has-hyphen"));
        assert!(!is_safe_database_name("quote\"d"));
        assert!(!is_safe_database_name(&"a".repeat(64)));
    }

    #[tokio::test]
    async fn test_db_is_migrated() {
        let test_db = TestDb::new().await;

        let tables: i64 = query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables
             WHERE table_schema = 'public'
               AND table_name IN ('movies', 'carts', 'cart_items', 'orders', 'order_lines')",
        )
        .fetch_one(test_db.pool())
        .await
        .expect("Failed to query schema");

        assert_eq!(tables, 5);
    }
}
