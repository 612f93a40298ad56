//! Repository layer for database operations.

use crate::domain::PersistedPricingStrategy;
use crate::store::{StoreError, StrategyStore};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::warn;

/// SQLite-backed strategy store.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a strategy and return its id.
    ///
    /// `parameters` is stored verbatim, so callers writing catalog records
    /// must supply the full `{"parameters": {"parameters": {...}}}` document.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_strategy(&self, engine: &str, parameters: &Value) -> Result<i64, sqlx::Error> {
        let now = chrono::Utc::now().timestamp_millis();
        let result = sqlx::query(
            r#"
            INSERT INTO pricing_strategies (engine, parameters, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(engine)
        .bind(parameters.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}

fn strategy_from_row(row: &SqliteRow) -> PersistedPricingStrategy {
    let id: i64 = row.get("id");
    let engine: String = row.get("engine");
    let raw: String = row.get("parameters");

    // Unparsable text is kept as a string so decoding reports it per record.
    let parameters = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(strategy_id = id, error = %e, "stored parameters are not valid JSON");
            Value::String(raw)
        }
    };

    PersistedPricingStrategy {
        id,
        engine,
        parameters,
    }
}

#[async_trait]
impl StrategyStore for Repository {
    async fn list_strategies(&self) -> Result<Vec<PersistedPricingStrategy>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, engine, parameters
            FROM pricing_strategies
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(strategy_from_row).collect())
    }

    async fn get_strategy(&self, id: i64) -> Result<Option<PersistedPricingStrategy>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, engine, parameters
            FROM pricing_strategies
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(strategy_from_row))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
