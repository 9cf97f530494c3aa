//! The model layer: a `ModelManager` owning the Postgres connection pool and
//! the signup store operations built on top of it.

mod signup;

pub use signup::Signup;

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, Connection, PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::config::{get_or_init_config, AppConfig};

/// Idempotent schema bootstrap, safe to run on every startup.
const BOOTSTRAP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS marketing_signups (
    id SERIAL PRIMARY KEY,
    contact_info VARCHAR(255) NOT NULL,
    signup_date TIMESTAMPTZ NOT NULL DEFAULT now(),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)"#;

#[derive(Clone, Debug)]
pub struct ModelManager {
    db: PgPool,
}

impl ModelManager {
    pub async fn init(config: &AppConfig) -> Result<Self> {
        info!("{:<20} - Initializing the DB pool", "init_db");
        // NOTE: Tests sometimes fail if there is more than 1 max connection. This fixes it.
        let max_cons = if cfg!(test) { 1 } else { 5 };

        let con_opts = config.db_config.connection_options();

        let db_pool = PgPoolOptions::new()
            .max_connections(max_cons)
            .acquire_timeout(Duration::from_millis(500))
            .connect_with(con_opts)
            .await
            .map_err(|ex| Error::FailToCreatePool(format!("Standard DB Pool: {ex}")))?;

        Ok(Self { db: db_pool })
    }

    /// Ensures the `marketing_signups` table exists.
    /// Runs before the listener starts accepting traffic; the caller treats a
    /// failure here as fatal so the process never serves against a missing
    /// table.
    pub async fn bootstrap(&self) -> Result<()> {
        info!("{:<20} - Ensuring the signups table exists", "bootstrap");
        sqlx::query(BOOTSTRAP_SQL).execute(&self.db).await?;
        Ok(())
    }

    /// Creates a scratch database with a unique name, connects a pool to it
    /// and bootstraps the schema. Used by the integration tests so every test
    /// starts from an empty table.
    pub async fn test_init() -> Result<Self> {
        let mut db_config = get_or_init_config().db_config.clone();

        let mut connection =
            PgConnection::connect_with(&db_config.connection_options_without_db()).await?;
        db_config.db_name = format!("test_{}", Uuid::new_v4().simple());
        let sql = format!(r#"CREATE DATABASE "{}";"#, db_config.db_name);
        sqlx::query(&sql).execute(&mut connection).await?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_millis(1000))
            .connect_with(db_config.connection_options())
            .await
            .map_err(|ex| Error::FailToCreatePool(format!("Test Config: {ex}")))?;

        let mm = Self { db: db_pool };
        mm.bootstrap().await?;

        Ok(mm)
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create db pool: {0}")]
    FailToCreatePool(String),
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
