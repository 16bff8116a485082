use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::ports::RecyclingOptionRepository;
use crate::domain::{RecyclingOptionDetail, RecyclingOptionSummary};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SqliteRecyclingOptionRepository {
    pool: SqlitePool,
}

impl SqliteRecyclingOptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecyclingOptionRepository for SqliteRecyclingOptionRepository {
    async fn list_for_foam(&self, foam_code: &str) -> Result<Vec<RecyclingOptionSummary>> {
        let mut conn = self.pool().acquire().await?;

        let rows = sqlx::query_as::<_, RecyclingOptionSummary>(
            r#"
            SELECT
                ro.id,
                ro.foam_type_id,
                ro.process_method_id,
                ro.name,
                ro.description,
                ro.cost_eur_per_kg,
                ro.co2_saved_kg_per_kg_foam,
                ro.benefit,
                ro.notes,

                ft.code AS foam_code,
                ft.name AS foam_name,
                ft.density_kg_m3 AS foam_density_kg_m3,

                pm.name AS process_method_name,
                pm.code AS process_method_code
            FROM recycling_options ro
            JOIN foam_types ft ON ft.id = ro.foam_type_id
            LEFT JOIN process_methods pm ON pm.id = ro.process_method_id
            WHERE ft.code = ?1
            ORDER BY ro.id
            "#,
        )
        .bind(foam_code)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }

    async fn find_detail(&self, option_id: i64) -> Result<Option<RecyclingOptionDetail>> {
        let mut conn = self.pool().acquire().await?;

        let row = sqlx::query_as::<_, RecyclingOptionDetail>(
            r#"
            SELECT
                ro.id,
                ro.foam_type_id,
                ro.process_method_id,
                ro.name,
                ro.description,
                ro.cost_eur_per_kg,
                ro.co2_saved_kg_per_kg_foam,
                ro.benefit,
                ro.notes,
                ro.prerequisites,
                ro.precautions,
                ro.calculation,

                ft.code AS foam_code,
                ft.name AS foam_name,
                ft.density_kg_m3 AS foam_density_kg_m3,

                pm.name AS process_method_name,
                pm.code AS process_method_code
            FROM recycling_options ro
            JOIN foam_types ft ON ft.id = ro.foam_type_id
            LEFT JOIN process_methods pm ON pm.id = ro.process_method_id
            WHERE ro.id = ?1
            "#,
        )
        .bind(option_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row)
    }
}
