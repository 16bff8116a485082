pub mod error;

use std::{fs, path::PathBuf};

use tracing::debug;

use crate::models::{
    CatalogueConfig, Config, ConfigMetadata, CorsConfig, DatabaseConfig, PagesConfig,
    ServerConfig,
    sources::{EnvConfig, FileConfig},
};
use crate::validation::{self, ConfigWarnings};
use error::ConfigLoadError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://mousse.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_HOME_COUNTRY: &str = "France";

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &["mousse.toml", "config/mousse.toml"];

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    overrides: ConfigOverrides,
}

/// Command-line values. They win over both the file and the environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.options.overrides = overrides;
        self
    }

    /// Reads `.env`, the process environment and the config file, in that
    /// order of precedence below the command-line overrides.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Same as [`ConfigLoader::load`] with an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) =
            self.compose_config(file_config, env, config_path, env_file_loaded)?;

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // An explicit or env-provided path must exist; defaults are optional.
        let (path, required) = if let Some(explicit) = &self.options.config_path {
            (Some(explicit.clone()), true)
        } else if let Some(from_env) = &env.config_path {
            (Some(from_env.clone()), true)
        } else {
            let found = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists());
            (found, false)
        };

        let Some(path) = path else {
            return Ok((None, None));
        };

        if !path.exists() {
            if required {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
            path: path.clone(),
            source: err,
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        debug!(path = %path.display(), "configuration file parsed");

        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
        env_file_loaded: bool,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No mousse.toml detected; falling back to environment variables",
                "Create mousse.toml or point MOUSSE_CONFIG at a configuration file",
            );
        }

        let FileConfig {
            server: file_server,
            database: file_database,
            catalogue: file_catalogue,
            cors: file_cors,
            pages: file_pages,
            dev_mode: file_dev_mode,
        } = file_config.unwrap_or_default();
        let overrides = self.options.overrides.clone();

        let server = ServerConfig {
            host: overrides
                .host
                .or(env.server_host)
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides
                .port
                .or(env.server_port)
                .or(file_server.port)
                .unwrap_or(DEFAULT_PORT),
        };

        let database = DatabaseConfig {
            url: overrides
                .database_url
                .or(env.database_url)
                .or(file_database.url)
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: env
                .database_max_connections
                .or(file_database.max_connections)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };

        let configured_country = env.home_country.or(file_catalogue.home_country);
        let home_country_defaulted = configured_country.is_none();
        let catalogue = CatalogueConfig {
            home_country: configured_country
                .unwrap_or_else(|| DEFAULT_HOME_COUNTRY.to_string()),
        };

        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .or(file_cors.allowed_origins)
                .unwrap_or_else(default_cors_origins),
        };

        let pages = PagesConfig {
            templates_dir: env.templates_dir.or(file_pages.templates_dir),
        };

        let dev_mode = env.dev_mode.or(file_dev_mode).unwrap_or(false);

        let metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
            home_country_defaulted,
        };

        let config = Config {
            server,
            database,
            catalogue,
            cors,
            pages,
            dev_mode,
            metadata,
        };

        let guard_warnings = validation::apply_guard_rails(&config)?;
        warnings.extend(guard_warnings);

        Ok((config, warnings))
    }
}

fn default_cors_origins() -> Vec<String> {
    vec![
        format!("http://localhost:{DEFAULT_PORT}"),
        format!("http://127.0.0.1:{DEFAULT_PORT}"),
    ]
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
