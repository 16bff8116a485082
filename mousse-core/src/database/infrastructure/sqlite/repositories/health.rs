use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::ports::StorageHealth;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SqliteStorageHealth {
    pool: SqlitePool,
}

impl SqliteStorageHealth {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageHealth for SqliteStorageHealth {
    async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
