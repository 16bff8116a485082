//! # Mousse Core
//!
//! Core library for the Mousse catalogue: foam material types, the recycling
//! options available for each of them and the companies that carry those
//! options out.
//!
//! ## Architecture
//!
//! - [`domain`]: catalogue records, precedence tables, display formatting
//!   and the company ordering and search rules
//! - [`database`]: repository ports and their SQLite adapters
//! - [`service`]: [`CatalogueService`], the read operations served over HTTP
//! - [`error`]: [`CatalogueError`] and the crate [`Result`] alias
//!
//! ## Example
//!
//! ```no_run
//! use mousse_core::{CatalogueDatabase, CatalogueService, ConnectOptions, HomeCountry};
//!
//! async fn foam_codes() -> mousse_core::Result<Vec<String>> {
//!     let db = CatalogueDatabase::connect("sqlite://mousse.db", &ConnectOptions::default()).await?;
//!     let service = CatalogueService::new(db.repositories(), HomeCountry::new("France"));
//!
//!     let foams = service.list_foam_types().await?;
//!     Ok(foams.into_iter().map(|foam| foam.code).collect())
//! }
//! ```

#![allow(missing_docs)]

pub mod database;
pub mod domain;
pub mod error;
pub mod service;

/// Embedded catalogue schema.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use database::{CatalogueDatabase, CatalogueRepositories, ConnectOptions};
pub use domain::{CompanyQuery, CompanySearch, HomeCountry};
pub use error::{CatalogueError, Result};
pub use service::CatalogueService;
