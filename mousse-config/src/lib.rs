//! Configuration for the Mousse catalogue server.
//!
//! Values are layered: a TOML file, then `.env` and the process environment,
//! then command-line overrides. The composed [`Config`] passes through guard
//! rails before it is handed out together with any [`ConfigWarnings`].

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigOverrides, error::ConfigLoadError};
pub use models::{
    CatalogueConfig, Config, ConfigMetadata, CorsConfig, DatabaseConfig, PagesConfig,
    ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
