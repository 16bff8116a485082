use async_trait::async_trait;

use crate::domain::{FoamTypeSheet, FoamTypeSummary};
use crate::error::Result;

#[async_trait]
pub trait FoamTypeRepository: Send + Sync {
    /// All foam types, ordered by name.
    async fn list_foam_types(&self) -> Result<Vec<FoamTypeSummary>>;

    /// Loads the foam and its child rows, each list in insertion order.
    /// `None` when no foam carries `code`.
    async fn load_sheet(&self, code: &str) -> Result<Option<FoamTypeSheet>>;
}
