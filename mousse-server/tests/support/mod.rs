use anyhow::{Result, anyhow};
use axum_test::TestServer;
use mousse_config::{
    CatalogueConfig, Config, ConfigMetadata, CorsConfig, DatabaseConfig, PagesConfig,
    ServerConfig,
};
use mousse_core::{CatalogueDatabase, CatalogueService, HomeCountry};
use mousse_server::{AppState, create_app, pages::PageRenderer};
use sqlx::SqlitePool;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        },
        catalogue: CatalogueConfig {
            home_country: "France".into(),
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        pages: PagesConfig::default(),
        dev_mode: true,
        metadata: ConfigMetadata::default(),
    }
}

/// Full application router over the given pool, served in-process.
pub fn build_test_server(pool: SqlitePool) -> Result<TestServer> {
    let db = CatalogueDatabase::from_pool(pool);
    let catalogue = CatalogueService::new(db.repositories(), HomeCountry::new("France"));
    let pages = PageRenderer::load(None)?;

    let app = create_app(AppState::new(catalogue, pages, test_config()));
    TestServer::new(app).map_err(|err| anyhow!(err.to_string()))
}
