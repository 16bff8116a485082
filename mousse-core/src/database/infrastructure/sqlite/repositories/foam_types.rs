use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::database::ports::FoamTypeRepository;
use crate::domain::{
    CompositionItem, FoamType, FoamTypeSheet, FoamTypeSummary, HazardRecord,
    PhysicalProperty, Standard,
};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SqliteFoamTypeRepository {
    pool: SqlitePool,
}

impl SqliteFoamTypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl FoamTypeRepository for SqliteFoamTypeRepository {
    async fn list_foam_types(&self) -> Result<Vec<FoamTypeSummary>> {
        let mut conn = self.pool().acquire().await?;

        let rows = sqlx::query_as::<_, FoamTypeSummary>(
            r#"
            SELECT id, code, name, family, image_path
            FROM foam_types
            ORDER BY name
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }

    async fn load_sheet(&self, code: &str) -> Result<Option<FoamTypeSheet>> {
        let mut conn = self.pool().acquire().await?;

        let Some(foam) = sqlx::query_as::<_, FoamType>(
            r#"
            SELECT
                id, code, name, family, visual_aspect,
                density_kg_m3, reuse_routes, image_path
            FROM foam_types
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *conn)
        .await?
        else {
            debug!(code, "foam type lookup missed");
            return Ok(None);
        };

        let composition_items = sqlx::query_as::<_, CompositionItem>(
            r#"
            SELECT category, component, typical, notes
            FROM foam_composition_items
            WHERE foam_type_id = ?1
            ORDER BY id
            "#,
        )
        .bind(foam.id)
        .fetch_all(&mut *conn)
        .await?;

        let physical_properties = sqlx::query_as::<_, PhysicalProperty>(
            r#"
            SELECT property, value, unit, standard, notes
            FROM foam_physical_properties
            WHERE foam_type_id = ?1
            ORDER BY id
            "#,
        )
        .bind(foam.id)
        .fetch_all(&mut *conn)
        .await?;

        let hazards = sqlx::query_as::<_, HazardRecord>(
            r#"
            SELECT phase, hazard, mitigation
            FROM foam_hazards
            WHERE foam_type_id = ?1 AND phase IN ('use', 'recycling')
            ORDER BY id
            "#,
        )
        .bind(foam.id)
        .fetch_all(&mut *conn)
        .await?;

        let standards = sqlx::query_as::<_, Standard>(
            r#"
            SELECT domain, standard_ref, title, notes
            FROM foam_standards
            WHERE foam_type_id = ?1
            ORDER BY id
            "#,
        )
        .bind(foam.id)
        .fetch_all(&mut *conn)
        .await?;

        debug!(
            code,
            composition = composition_items.len(),
            properties = physical_properties.len(),
            hazards = hazards.len(),
            standards = standards.len(),
            "loaded foam sheet"
        );

        Ok(Some(FoamTypeSheet {
            foam,
            composition_items,
            physical_properties,
            hazards,
            standards,
        }))
    }
}
