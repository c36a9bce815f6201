use crate::domain::order::Order;
use crate::domain::ports::OrderStore;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::str::FromStr;

/// Table holding one row per order.
///
/// `total` is kept as decimal text; SQLite has no exact decimal type.
pub const CREATE_ORDERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL,
        product_id INTEGER NOT NULL,
        quantity INTEGER NOT NULL,
        total TEXT NOT NULL
    )"#;

/// A persistent order store backed by SQLite through `sqlx`.
///
/// `Clone` shares the underlying pool.
#[derive(Clone)]
pub struct SqliteOrderStore {
    pool: SqlitePool,
}

impl SqliteOrderStore {
    /// Opens (or creates) the database at `database_url` and makes sure the
    /// `orders` table exists.
    ///
    /// # Arguments
    ///
    /// * `database_url` - e.g. `sqlite://orders.db` or `sqlite::memory:`.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // A single long-lived connection: `sqlite::memory:` databases die
        // with the connection that created them.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self::from_pool(pool).await?;
        tracing::info!(database_url, "SQLite order store ready");
        Ok(store)
    }

    /// Wraps an existing pool, creating the `orders` table if missing.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_ORDERS_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn order_from_row(row: &SqliteRow) -> Result<Order> {
    let total: String = row.try_get("total")?;
    let total = Decimal::from_str(&total).map_err(|e| OrderError::InternalError(Box::new(e)))?;

    Ok(Order {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        product_id: row.try_get("product_id")?,
        quantity: row.try_get("quantity")?,
        total,
    })
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn insert(&self, order: &Order) -> Result<()> {
        sqlx::query(
            r#"INSERT INTO orders (id, user_id, product_id, quantity, total)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
        )
        .bind(order.id)
        .bind(order.user_id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.total.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"SELECT id, user_id, product_id, quantity, total
               FROM orders WHERE user_id = ?1"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(order_from_row).collect()
    }
}
