//! Catalogue read operations.
//!
//! [`CatalogueService`] is the single entry point the HTTP layer talks to. It
//! holds no state of its own beyond repository handles and the configured
//! home country, so it can be shared freely across concurrent requests.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::database::CatalogueRepositories;
use crate::database::ports::{
    CompanyRepository, FoamTypeRepository, RecyclingOptionRepository, StorageHealth,
};
use crate::domain::{
    Company, CompanyQuery, CompanyRecyclingOption, FoamTypeDetail, FoamTypeSummary,
    HomeCountry, RecyclingOptionDetail, RecyclingOptionSummary, WithDisplays,
};
use crate::error::{CatalogueError, Result};

pub const FOAM_NOT_FOUND: &str = "Mousse introuvable";
pub const RECYCLING_OPTION_NOT_FOUND: &str = "Méthode introuvable";
pub const COMPANY_NOT_FOUND: &str = "Entreprise introuvable";
pub const FOAM_CODE_MISSING: &str = "foam_code manquant";

#[derive(Clone)]
pub struct CatalogueService {
    foam_types: Arc<dyn FoamTypeRepository>,
    recycling_options: Arc<dyn RecyclingOptionRepository>,
    companies: Arc<dyn CompanyRepository>,
    health: Arc<dyn StorageHealth>,
    home_country: HomeCountry,
}

impl std::fmt::Debug for CatalogueService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogueService")
            .field("home_country", &self.home_country)
            .finish_non_exhaustive()
    }
}

impl CatalogueService {
    pub fn new(repositories: CatalogueRepositories, home_country: HomeCountry) -> Self {
        Self {
            foam_types: repositories.foam_types,
            recycling_options: repositories.recycling_options,
            companies: repositories.companies,
            health: repositories.health,
            home_country,
        }
    }

    pub async fn health_check(&self) -> Result<()> {
        self.health.ping().await
    }

    #[instrument(skip(self), level = "debug", err)]
    pub async fn list_foam_types(&self) -> Result<Vec<FoamTypeSummary>> {
        self.foam_types.list_foam_types().await
    }

    #[instrument(skip(self), level = "debug", err)]
    pub async fn get_foam_type_detail(&self, code: &str) -> Result<FoamTypeDetail> {
        let sheet = self
            .foam_types
            .load_sheet(code)
            .await?
            .ok_or_else(|| CatalogueError::not_found(FOAM_NOT_FOUND))?;

        Ok(FoamTypeDetail::assemble(sheet))
    }

    /// `foam_code` is required; a blank value counts as missing. An unknown
    /// code is not an error and yields an empty list.
    #[instrument(skip(self), level = "debug", err)]
    pub async fn list_recycling_options(
        &self,
        foam_code: Option<&str>,
    ) -> Result<Vec<WithDisplays<RecyclingOptionSummary>>> {
        let foam_code = foam_code
            .filter(|code| !code.is_empty())
            .ok_or_else(|| CatalogueError::bad_request(FOAM_CODE_MISSING))?;

        let rows = self.recycling_options.list_for_foam(foam_code).await?;
        debug!(foam_code, count = rows.len(), "listed recycling options");

        Ok(rows.into_iter().map(WithDisplays::from).collect())
    }

    #[instrument(skip(self), level = "debug", err)]
    pub async fn get_recycling_option_detail(
        &self,
        option_id: i64,
    ) -> Result<WithDisplays<RecyclingOptionDetail>> {
        self.recycling_options
            .find_detail(option_id)
            .await?
            .map(WithDisplays::from)
            .ok_or_else(|| CatalogueError::not_found(RECYCLING_OPTION_NOT_FOUND))
    }

    #[instrument(skip(self), level = "debug", err)]
    pub async fn list_companies(&self, query: &CompanyQuery) -> Result<Vec<Company>> {
        let mut companies = match query {
            CompanyQuery::ForRecyclingOption(option_id) => {
                self.companies.list_for_option(*option_id).await?
            }
            CompanyQuery::Search(search) => {
                let mut all = self.companies.list_companies().await?;
                all.retain(|company| search.matches(company));
                all
            }
            CompanyQuery::All => self.companies.list_companies().await?,
        };

        self.home_country.sort(&mut companies);
        Ok(companies)
    }

    #[instrument(skip(self), level = "debug", err)]
    pub async fn get_company(&self, company_id: i64) -> Result<Company> {
        self.companies
            .find_company(company_id)
            .await?
            .ok_or_else(|| CatalogueError::not_found(COMPANY_NOT_FOUND))
    }

    /// Unknown companies simply have no options.
    #[instrument(skip(self), level = "debug", err)]
    pub async fn list_company_options(
        &self,
        company_id: i64,
    ) -> Result<Vec<WithDisplays<CompanyRecyclingOption>>> {
        let rows = self.companies.list_company_options(company_id).await?;
        Ok(rows.into_iter().map(WithDisplays::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{CellValue, CompanySearch, FoamType, FoamTypeSheet, HazardRecord};

    #[derive(Default)]
    struct FakeFoamTypes {
        sheets: HashMap<String, FoamTypeSheet>,
    }

    #[async_trait]
    impl FoamTypeRepository for FakeFoamTypes {
        async fn list_foam_types(&self) -> Result<Vec<FoamTypeSummary>> {
            Ok(vec![])
        }

        async fn load_sheet(&self, code: &str) -> Result<Option<FoamTypeSheet>> {
            Ok(self.sheets.get(code).cloned())
        }
    }

    #[derive(Default)]
    struct FakeRecyclingOptions {
        by_foam: HashMap<String, Vec<RecyclingOptionSummary>>,
    }

    #[async_trait]
    impl RecyclingOptionRepository for FakeRecyclingOptions {
        async fn list_for_foam(&self, foam_code: &str) -> Result<Vec<RecyclingOptionSummary>> {
            Ok(self.by_foam.get(foam_code).cloned().unwrap_or_default())
        }

        async fn find_detail(&self, _option_id: i64) -> Result<Option<RecyclingOptionDetail>> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct FakeCompanies {
        companies: Vec<Company>,
        links: Vec<(i64, i64)>,
    }

    #[async_trait]
    impl CompanyRepository for FakeCompanies {
        async fn list_companies(&self) -> Result<Vec<Company>> {
            Ok(self.companies.clone())
        }

        async fn list_for_option(&self, recycling_option_id: i64) -> Result<Vec<Company>> {
            Ok(self
                .companies
                .iter()
                .filter(|company| self.links.contains(&(company.id, recycling_option_id)))
                .cloned()
                .collect())
        }

        async fn find_company(&self, company_id: i64) -> Result<Option<Company>> {
            Ok(self.companies.iter().find(|c| c.id == company_id).cloned())
        }

        async fn list_company_options(&self, _company_id: i64) -> Result<Vec<CompanyRecyclingOption>> {
            Ok(vec![])
        }
    }

    struct AlwaysUp;

    #[async_trait]
    impl StorageHealth for AlwaysUp {
        async fn ping(&self) -> Result<()> {
            Ok(())
        }
    }

    fn company(id: i64, name: &str, country: &str) -> Company {
        Company {
            id,
            name: name.into(),
            city: None,
            country: Some(country.into()),
            company_type: None,
            notes: None,
            website: None,
            email: None,
            phone: None,
            address: None,
        }
    }

    fn service(
        foam_types: FakeFoamTypes,
        recycling_options: FakeRecyclingOptions,
        companies: FakeCompanies,
    ) -> CatalogueService {
        CatalogueService::new(
            CatalogueRepositories {
                foam_types: Arc::new(foam_types),
                recycling_options: Arc::new(recycling_options),
                companies: Arc::new(companies),
                health: Arc::new(AlwaysUp),
            },
            HomeCountry::new("France"),
        )
    }

    #[tokio::test]
    async fn unknown_foam_is_not_found() {
        let service = service(
            FakeFoamTypes::default(),
            FakeRecyclingOptions::default(),
            FakeCompanies::default(),
        );

        service.health_check().await.unwrap();
        let err = service.get_foam_type_detail("XXX").await.unwrap_err();
        assert!(matches!(err, CatalogueError::NotFound(ref msg) if msg == FOAM_NOT_FOUND));
    }

    #[tokio::test]
    async fn detail_drops_manufacturing_hazards() {
        let mut foam_types = FakeFoamTypes::default();
        foam_types.sheets.insert(
            "EVA".into(),
            FoamTypeSheet {
                foam: FoamType {
                    id: 3,
                    code: "EVA".into(),
                    name: "EVA".into(),
                    family: None,
                    visual_aspect: None,
                    density_kg_m3: Some(CellValue::from(45_i64)),
                    reuse_routes: None,
                    image_path: None,
                },
                composition_items: vec![],
                physical_properties: vec![],
                hazards: vec![HazardRecord {
                    phase: "manufacturing".into(),
                    hazard: "solvants".into(),
                    mitigation: None,
                }],
                standards: vec![],
            },
        );
        let service = service(
            foam_types,
            FakeRecyclingOptions::default(),
            FakeCompanies::default(),
        );

        let detail = service.get_foam_type_detail("EVA").await.unwrap();
        assert!(detail.hazards.in_use.is_empty());
        assert!(detail.hazards.recycling.is_empty());
        assert_eq!(detail.density_display.as_deref(), Some("45 kg/m³"));
    }

    #[tokio::test]
    async fn missing_or_blank_foam_code_is_bad_request() {
        let service = service(
            FakeFoamTypes::default(),
            FakeRecyclingOptions::default(),
            FakeCompanies::default(),
        );

        for code in [None, Some("")] {
            let err = service.list_recycling_options(code).await.unwrap_err();
            assert!(matches!(err, CatalogueError::BadRequest(_)));
        }

        let rows = service.list_recycling_options(Some("NOPE")).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn option_filter_ignores_search_and_orders_home_first() {
        let companies = FakeCompanies {
            companies: vec![
                company(1, "Recytex", "Belgique"),
                company(2, "Mousse Lyon", "France"),
                company(3, "Schaum AG", "Allemagne"),
            ],
            links: vec![(1, 9), (2, 9), (3, 4)],
        };
        let service = service(
            FakeFoamTypes::default(),
            FakeRecyclingOptions::default(),
            companies,
        );

        let listed = service
            .list_companies(&CompanyQuery::ForRecyclingOption(9))
            .await
            .unwrap();
        let ids: Vec<i64> = listed.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let searched = service
            .list_companies(&CompanyQuery::Search(CompanySearch::parse("schaum").unwrap()))
            .await
            .unwrap();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, 3);
    }

    #[tokio::test]
    async fn unknown_company_is_not_found() {
        let service = service(
            FakeFoamTypes::default(),
            FakeRecyclingOptions::default(),
            FakeCompanies::default(),
        );

        let err = service.get_company(42).await.unwrap_err();
        assert!(matches!(err, CatalogueError::NotFound(ref msg) if msg == COMPANY_NOT_FOUND));
        assert!(service.list_company_options(42).await.unwrap().is_empty());
    }
}
