use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Succeeds when the store answers a trivial query.
    async fn ping(&self) -> Result<()>;
}
