use async_trait::async_trait;

use crate::domain::{Company, CompanyRecyclingOption};
use crate::error::Result;

/// Company reads. Listing order is applied by the caller.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list_companies(&self) -> Result<Vec<Company>>;

    async fn list_for_option(&self, recycling_option_id: i64) -> Result<Vec<Company>>;

    async fn find_company(&self, company_id: i64) -> Result<Option<Company>>;

    /// Options linked to the company, ordered by foam name then option id.
    async fn list_company_options(&self, company_id: i64) -> Result<Vec<CompanyRecyclingOption>>;
}
