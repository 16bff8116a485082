use thiserror::Error;

use super::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("home country must not be empty")]
    EmptyHomeCountry,
    #[error("SERVER_PORT 0 is only allowed when DEV_MODE is true")]
    EphemeralPort,
    #[error("DATABASE_MAX_CONNECTIONS must be at least 1")]
    NoDatabaseConnections,
    #[error("CORS wildcard origins are not allowed when DEV_MODE is false")]
    DangerousCorsWildcard,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.catalogue.home_country.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyHomeCountry);
    }

    if config.server.port == 0 && !config.dev_mode {
        return Err(ConfigGuardRailError::EphemeralPort);
    }

    if config.database.max_connections == 0 {
        return Err(ConfigGuardRailError::NoDatabaseConnections);
    }

    if !config.dev_mode && config.cors.is_wildcard_included() {
        return Err(ConfigGuardRailError::DangerousCorsWildcard);
    }

    if config.metadata.home_country_defaulted {
        warnings.push_with_hint(
            format!(
                "Home country not configured; defaulting to {}",
                config.catalogue.home_country
            ),
            "Set MOUSSE_HOME_COUNTRY or catalogue.home_country to choose which companies are listed first",
        );
    }

    if let Some(path) = config.database.sqlite_path()
        && !path.exists()
    {
        warnings.push_with_hint(
            format!("Base absente: {}", path.display()),
            "Run `mousse-server db migrate` to create the schema, then load the catalogue data",
        );
    }

    if config.cors.allowed_origins.is_empty() && !config.dev_mode {
        warnings.push(
            "CORS_ALLOWED_ORIGINS is empty; cross-origin browser clients will be rejected",
        );
    }

    Ok(warnings)
}
