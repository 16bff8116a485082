//! SQLite-backed storage for the catalogue.
//!
//! [`CatalogueDatabase`] owns the connection pool. Repositories borrow one
//! pooled connection per operation and hand it back when the operation ends,
//! whether it returns a result, a miss or an error.

pub mod infrastructure;
pub mod ports;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::MIGRATOR;
use crate::error::Result;
use infrastructure::sqlite::{
    SqliteCompanyRepository, SqliteFoamTypeRepository, SqliteRecyclingOptionRepository,
    SqliteStorageHealth,
};
use ports::{CompanyRepository, FoamTypeRepository, RecyclingOptionRepository, StorageHealth};

/// How the pool opens the database file.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub max_connections: u32,
    /// Create the file when it does not exist. Only schema setup wants this;
    /// serving from a missing file should fail loudly instead.
    pub create_if_missing: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            create_if_missing: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogueDatabase {
    pool: SqlitePool,
}

impl CatalogueDatabase {
    pub async fn connect(database_url: &str, options: &ConnectOptions) -> Result<Self> {
        info!("Connecting to SQLite catalogue");

        let connect_options = SqliteConnectOptions::from_str(database_url)?
            .foreign_keys(true)
            .create_if_missing(options.create_if_missing);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(connect_options)
            .await?;

        info!("Successfully connected to SQLite catalogue");

        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations");
        MIGRATOR.run(&self.pool).await?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Lists embedded migrations that have not been applied yet.
    pub async fn pending_migrations(&self) -> Result<Vec<String>> {
        let mut conn = self.pool.acquire().await?;

        let applied: Vec<i64> = match sqlx::query_scalar(
            "SELECT version FROM _sqlx_migrations WHERE success = 1",
        )
        .fetch_all(&mut *conn)
        .await
        {
            Ok(versions) => versions,
            // Never migrated: the bookkeeping table does not exist yet.
            Err(sqlx::Error::Database(err)) if err.message().contains("no such table") => {
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(MIGRATOR
            .iter()
            .filter(|migration| !applied.contains(&migration.version))
            .map(|migration| format!("{}_{}", migration.version, migration.description))
            .collect())
    }

    /// Round-trips a trivial query.
    pub async fn ping(&self) -> Result<()> {
        SqliteStorageHealth::new(self.pool.clone()).ping().await
    }

    pub fn repositories(&self) -> CatalogueRepositories {
        CatalogueRepositories {
            foam_types: Arc::new(SqliteFoamTypeRepository::new(self.pool.clone())),
            recycling_options: Arc::new(SqliteRecyclingOptionRepository::new(self.pool.clone())),
            companies: Arc::new(SqliteCompanyRepository::new(self.pool.clone())),
            health: Arc::new(SqliteStorageHealth::new(self.pool.clone())),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Repository handles consumed by the catalogue service.
#[derive(Clone)]
pub struct CatalogueRepositories {
    pub foam_types: Arc<dyn FoamTypeRepository>,
    pub recycling_options: Arc<dyn RecyclingOptionRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub health: Arc<dyn StorageHealth>,
}

impl std::fmt::Debug for CatalogueRepositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogueRepositories").finish_non_exhaustive()
    }
}
