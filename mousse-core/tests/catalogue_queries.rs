use mousse_core::domain::CellValue;
use mousse_core::{
    CatalogueDatabase, CatalogueError, CatalogueService, CompanyQuery, HomeCountry,
};
use sqlx::SqlitePool;

fn service(pool: SqlitePool) -> CatalogueService {
    let db = CatalogueDatabase::from_pool(pool);
    CatalogueService::new(db.repositories(), HomeCountry::new("France"))
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn foam_types_are_listed_by_name(pool: SqlitePool) -> anyhow::Result<()> {
    let foams = service(pool).list_foam_types().await?;

    let names: Vec<&str> = foams.iter().map(|foam| foam.name.as_str()).collect();
    assert_eq!(names, vec!["Caoutchouc nitrile", "EVA", "Polyuréthane souple"]);
    assert_eq!(foams[2].image_path.as_deref(), Some("img/pu-flex.jpg"));

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn every_listed_foam_resolves_to_a_sheet(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    for foam in service.list_foam_types().await? {
        let detail = service.get_foam_type_detail(&foam.code).await?;
        assert_eq!(detail.foam.id, foam.id);
    }

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn composition_follows_category_precedence(pool: SqlitePool) -> anyhow::Result<()> {
    let detail = service(pool).get_foam_type_detail("PU-FLEX").await?;

    let components: Vec<&str> = detail
        .composition_items
        .iter()
        .filter_map(|item| item.component.as_deref())
        .collect();
    assert_eq!(
        components,
        vec![
            "Isocyanate",
            "Polyol",
            "Carbonate de calcium",
            "Catalyseur amine",
            "Eau",
            "Pigment",
        ]
    );

    // Loose cells keep what the row stores.
    assert_eq!(
        detail.composition_items[2].typical,
        Some(CellValue::Text("5-10".into()))
    );

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn hazards_are_split_by_exact_phase(pool: SqlitePool) -> anyhow::Result<()> {
    let detail = service(pool).get_foam_type_detail("PU-FLEX").await?;

    let in_use: Vec<&str> = detail.hazards.in_use.iter().map(|h| h.hazard.as_str()).collect();
    let recycling: Vec<&str> = detail
        .hazards
        .recycling
        .iter()
        .map(|h| h.hazard.as_str())
        .collect();

    assert_eq!(in_use, vec!["Inflammabilité", "Dégradation UV"]);
    assert_eq!(recycling, vec!["Poussières de broyage"]);

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn properties_and_standards_keep_their_rules(pool: SqlitePool) -> anyhow::Result<()> {
    let detail = service(pool).get_foam_type_detail("PU-FLEX").await?;

    let properties: Vec<&str> = detail
        .physical_properties
        .iter()
        .map(|p| p.property.as_str())
        .collect();
    assert_eq!(
        properties,
        vec!["Masse volumique", "Résistance à la traction", "Allongement"]
    );

    let standards: Vec<&str> = detail
        .standards
        .iter()
        .filter_map(|s| s.standard_ref.as_deref())
        .collect();
    assert_eq!(
        standards,
        vec!["BS 5852", "EN 1021-1", "NF X 70-100", "ISO 3386", "REACH"]
    );

    assert_eq!(detail.density_display.as_deref(), Some("30.0 kg/m³"));

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn foam_without_density_has_no_display(pool: SqlitePool) -> anyhow::Result<()> {
    let detail = service(pool).get_foam_type_detail("NBR").await?;

    assert_eq!(detail.density_display, None);
    assert!(detail.composition_items.is_empty());
    assert!(detail.hazards.in_use.is_empty());

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn unknown_foam_code_is_not_found(pool: SqlitePool) -> anyhow::Result<()> {
    let result = service(pool).get_foam_type_detail("XXX").await;

    assert!(matches!(result, Err(CatalogueError::NotFound(_))));

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn recycling_options_carry_display_strings(pool: SqlitePool) -> anyhow::Result<()> {
    let options = service(pool).list_recycling_options(Some("PU-FLEX")).await?;

    let ids: Vec<i64> = options.iter().map(|o| o.record.id).collect();
    assert_eq!(ids, vec![1, 2]);

    assert_eq!(options[0].cost_display.as_deref(), Some("1.50 €/kg"));
    assert_eq!(options[0].co2_display.as_deref(), Some("2.00 kgCO₂e/kg"));
    assert_eq!(
        options[0].record.process_method_code.as_deref(),
        Some("MECA")
    );

    // No cost, and a CO₂ cell holding text.
    assert_eq!(options[1].cost_display, None);
    assert_eq!(options[1].co2_display, None);
    assert_eq!(options[1].record.process_method_name, None);

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn unmatched_foam_code_lists_nothing(pool: SqlitePool) -> anyhow::Result<()> {
    let options = service(pool).list_recycling_options(Some("XXX")).await?;
    assert!(options.is_empty());

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn recycling_option_detail_joins_foam_and_method(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    let detail = service.get_recycling_option_detail(3).await?;
    assert_eq!(detail.record.option.foam_code, "EVA");
    assert_eq!(detail.record.option.process_method_name.as_deref(), Some("Recyclage chimique"));
    assert_eq!(detail.cost_display.as_deref(), Some("0.46 €/kg"));
    assert_eq!(detail.co2_display.as_deref(), Some("1.23 kgCO₂e/kg"));

    let first = service.get_recycling_option_detail(1).await?;
    assert_eq!(first.record.calculation.as_deref(), Some("masse × 1.5"));

    let missing = service.get_recycling_option_detail(999).await;
    assert!(matches!(missing, Err(CatalogueError::NotFound(_))));

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn company_search_puts_home_country_first(pool: SqlitePool) -> anyhow::Result<()> {
    let companies = service(pool)
        .list_companies(&CompanyQuery::from_params(None, Some("  FRANCE ")))
        .await?;

    let ids: Vec<i64> = companies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 5, 4]);

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn company_directory_orders_every_row(pool: SqlitePool) -> anyhow::Result<()> {
    let companies = service(pool).list_companies(&CompanyQuery::All).await?;

    let ids: Vec<i64> = companies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 5, 6, 3, 4, 1]);

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn option_filter_wins_over_search(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    let companies = service
        .list_companies(&CompanyQuery::from_params(Some("3"), Some("recytex")))
        .await?;
    let ids: Vec<i64> = companies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 5, 3]);

    let none = service
        .list_companies(&CompanyQuery::from_params(Some("0"), None))
        .await?;
    assert!(none.is_empty());

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR", fixtures(path = "../fixtures", scripts("catalogue")))]
async fn company_options_are_ordered_by_foam_name(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    let company = service.get_company(2).await?;
    assert_eq!(company.email.as_deref(), Some("contact@mousse-lyon.example"));

    let options = service.list_company_options(2).await?;
    let foams: Vec<&str> = options.iter().map(|o| o.record.foam_code.as_str()).collect();
    assert_eq!(foams, vec!["EVA", "PU-FLEX"]);
    assert_eq!(options[1].cost_display.as_deref(), Some("1.50 €/kg"));

    assert!(service.list_company_options(999).await?.is_empty());
    assert!(matches!(
        service.get_company(999).await,
        Err(CatalogueError::NotFound(_))
    ));

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR")]
async fn empty_catalogue_is_valid(pool: SqlitePool) -> anyhow::Result<()> {
    let db = CatalogueDatabase::from_pool(pool);
    assert!(db.pending_migrations().await?.is_empty());
    db.ping().await?;

    let service = CatalogueService::new(db.repositories(), HomeCountry::new("France"));
    assert!(service.list_foam_types().await?.is_empty());
    assert!(service.list_companies(&CompanyQuery::All).await?.is_empty());
    service.health_check().await?;

    Ok(())
}

#[sqlx::test(migrations = false)]
async fn unmigrated_database_lists_every_migration(pool: SqlitePool) -> anyhow::Result<()> {
    let db = CatalogueDatabase::from_pool(pool);

    let pending = db.pending_migrations().await?;
    assert_eq!(pending.len(), mousse_core::MIGRATOR.iter().count());

    db.migrate().await?;
    assert!(db.pending_migrations().await?.is_empty());

    Ok(())
}

#[sqlx::test(migrator = "mousse_core::MIGRATOR")]
async fn migration_check_reports_storage_failures(pool: SqlitePool) -> anyhow::Result<()> {
    let db = CatalogueDatabase::from_pool(pool);
    db.close().await;

    let result = db.pending_migrations().await;
    assert!(matches!(result, Err(CatalogueError::Database(_))));

    Ok(())
}
