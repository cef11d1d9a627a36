//! Postgres-backed sequence store.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use crate::error::EngineError;
use crate::numbering::SequenceStore;

/// Sequence store backed by a `document_counters` table.
///
/// The increment is a single upsert that Postgres executes atomically per
/// row, so concurrent writers serialize on the counter row and each sees a
/// distinct value. Yearly reset needs no logic here: a new `(prefix, year)`
/// key starts its own row at 1.
#[derive(Clone)]
pub struct PgSequenceStore {
    pool: PgPool,
}

impl PgSequenceStore {
    /// Connect a new pool for the counter store.
    #[instrument(skip(database_url))]
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, EngineError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| EngineError::Database(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), EngineError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| EngineError::Database(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), EngineError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| EngineError::Database(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }
}

#[async_trait]
impl SequenceStore for PgSequenceStore {
    #[instrument(skip(self))]
    async fn next_sequence(&self, prefix: &str, year: i32) -> Result<i64, EngineError> {
        let sequence = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO document_counters (prefix, year, last_sequence)
            VALUES ($1, $2, 1)
            ON CONFLICT (prefix, year)
            DO UPDATE SET last_sequence = document_counters.last_sequence + 1
            RETURNING last_sequence
            "#,
        )
        .bind(prefix)
        .bind(year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            EngineError::NumberGeneration(anyhow::anyhow!(
                "Failed to advance counter {}-{}: {}",
                prefix,
                year,
                e
            ))
        })?;

        Ok(sequence)
    }
}
