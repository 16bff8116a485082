//! # Mousse Server
//!
//! Serves the foam catalogue over HTTP, and applies or checks its SQLite
//! schema through the `db` subcommands.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mousse_config::{Config, ConfigLoad, ConfigLoader, ConfigOverrides};
use mousse_core::{CatalogueDatabase, CatalogueService, ConnectOptions, HomeCountry};
use mousse_server::{AppState, create_app, pages::PageRenderer};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "mousse-server")]
#[command(about = "Foam catalogue server: recycling options and the companies that run them")]
struct Cli {
    /// Configuration file (defaults to mousse.toml or config/mousse.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// SQLite database URL (overrides config)
    #[arg(long)]
    database_url: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply the catalogue schema, creating the database file if needed, and exit
    Migrate,
    /// Verify the database is reachable and its schema is current, then exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_runtime_config(&cli)?;

    match cli.command {
        Some(Command::Db(DbCommand::Migrate)) => run_db_migrate(&config).await,
        Some(Command::Db(DbCommand::Check)) => run_db_check(&config).await,
        None => run_server(config).await,
    }
}

fn load_runtime_config(cli: &Cli) -> anyhow::Result<Config> {
    let overrides = ConfigOverrides {
        host: cli.serve.host.clone(),
        port: cli.serve.port,
        database_url: cli.serve.database_url.clone(),
    };

    let mut loader = ConfigLoader::new().with_overrides(overrides);
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }

    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    Ok(config)
}

fn connect_options(config: &Config, create_if_missing: bool) -> ConnectOptions {
    ConnectOptions {
        max_connections: config.database.max_connections,
        create_if_missing,
    }
}

async fn run_db_migrate(config: &Config) -> anyhow::Result<()> {
    let db = CatalogueDatabase::connect(&config.database.url, &connect_options(config, true))
        .await
        .context("failed to open SQLite database for migration")?;
    db.migrate().await.context("database migration failed")?;
    db.close().await;
    info!("Database migrations applied successfully");
    Ok(())
}

async fn run_db_check(config: &Config) -> anyhow::Result<()> {
    if let Some(path) = config.database.sqlite_path()
        && !path.exists()
    {
        warn!(
            path = %path.display(),
            hint = "run `mousse-server db migrate`, then load the catalogue data",
            "Base absente"
        );
        anyhow::bail!("database file {} does not exist", path.display());
    }

    let db = CatalogueDatabase::connect(&config.database.url, &connect_options(config, false))
        .await
        .context("failed to open SQLite database")?;
    db.ping().await.context("database did not answer")?;

    let pending = db
        .pending_migrations()
        .await
        .context("failed to read applied migrations")?;
    db.close().await;

    if !pending.is_empty() {
        for migration in &pending {
            warn!(migration = %migration, "migration not applied");
        }
        anyhow::bail!(
            "{} migration(s) pending; run `mousse-server db migrate`",
            pending.len()
        );
    }

    info!("Database check passed");
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let db = CatalogueDatabase::connect(&config.database.url, &connect_options(&config, false))
        .await
        .with_context(|| format!("failed to open SQLite database {}", config.database.url))?;

    let catalogue =
        CatalogueService::new(db.repositories(), HomeCountry::new(&config.catalogue.home_country));
    let pages = PageRenderer::load(config.pages.templates_dir())
        .context("failed to load page templates")?;

    let addr = config.server.bind_address();
    info!(
        home_country = %config.catalogue.home_country,
        dev_mode = config.dev_mode,
        "catalogue ready"
    );

    let app = create_app(AppState::new(catalogue, pages, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
