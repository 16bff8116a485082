use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::ports::CompanyRepository;
use crate::domain::{Company, CompanyRecyclingOption};
use crate::error::Result;

const COMPANY_COLUMNS: &str =
    "c.id, c.name, c.city, c.country, c.company_type, c.notes, c.website, c.email, c.phone, c.address";

#[derive(Debug, Clone)]
pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        let mut conn = self.pool().acquire().await?;

        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies c ORDER BY c.id");
        let rows = sqlx::query_as::<_, Company>(&sql)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows)
    }

    async fn list_for_option(&self, recycling_option_id: i64) -> Result<Vec<Company>> {
        let mut conn = self.pool().acquire().await?;

        let sql = format!(
            r#"
            SELECT {COMPANY_COLUMNS}
            FROM companies c
            JOIN company_recycling_options cro ON cro.company_id = c.id
            WHERE cro.recycling_option_id = ?1
            ORDER BY c.id
            "#
        );
        let rows = sqlx::query_as::<_, Company>(&sql)
            .bind(recycling_option_id)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows)
    }

    async fn find_company(&self, company_id: i64) -> Result<Option<Company>> {
        let mut conn = self.pool().acquire().await?;

        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies c WHERE c.id = ?1");
        let row = sqlx::query_as::<_, Company>(&sql)
            .bind(company_id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row)
    }

    async fn list_company_options(&self, company_id: i64) -> Result<Vec<CompanyRecyclingOption>> {
        let mut conn = self.pool().acquire().await?;

        let rows = sqlx::query_as::<_, CompanyRecyclingOption>(
            r#"
            SELECT
                ro.id,
                ro.name,
                ro.description,
                ro.cost_eur_per_kg,
                ro.co2_saved_kg_per_kg_foam,
                ro.benefit,
                ft.code AS foam_code,
                ft.name AS foam_name
            FROM company_recycling_options cro
            JOIN recycling_options ro ON ro.id = cro.recycling_option_id
            JOIN foam_types ft ON ft.id = ro.foam_type_id
            WHERE cro.company_id = ?1
            ORDER BY ft.name, ro.id
            "#,
        )
        .bind(company_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }
}
