use async_trait::async_trait;

use crate::domain::{RecyclingOptionDetail, RecyclingOptionSummary};
use crate::error::Result;

#[async_trait]
pub trait RecyclingOptionRepository: Send + Sync {
    /// Options of the foam identified by `foam_code`, in insertion order.
    async fn list_for_foam(&self, foam_code: &str) -> Result<Vec<RecyclingOptionSummary>>;

    async fn find_detail(&self, option_id: i64) -> Result<Option<RecyclingOptionDetail>>;
}
