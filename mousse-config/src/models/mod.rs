pub mod sources;

use std::path::{Path, PathBuf};

/// Fully resolved configuration for the catalogue server.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub catalogue: CatalogueConfig,
    pub cors: CorsConfig,
    pub pages: PagesConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// On-disk location of the SQLite file, when the URL points at one.
    /// In-memory databases have no path.
    pub fn sqlite_path(&self) -> Option<PathBuf> {
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        if path.is_empty()
            || path == ":memory:"
            || query.is_some_and(|q| q.split('&').any(|pair| pair == "mode=memory"))
        {
            return None;
        }

        Some(PathBuf::from(path))
    }
}

#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    /// Companies from this country are listed first.
    pub home_country: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

#[derive(Debug, Clone, Default)]
pub struct PagesConfig {
    /// Directory whose templates take precedence over the embedded ones.
    pub templates_dir: Option<PathBuf>,
}

impl PagesConfig {
    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates_dir.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
    pub home_country_defaulted: bool,
}
