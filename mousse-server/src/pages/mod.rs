//! Server-rendered page shells.
//!
//! Every page is a Tera template that receives the route's path and query
//! parameters unchanged and fetches its data from the JSON API in the
//! browser. Templates are embedded in the binary; a directory on disk can
//! replace any of them by file name.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("template {name} is not valid UTF-8")]
    Encoding { name: String },
    #[error("failed to read template overrides from {path}")]
    OverrideIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to compile templates")]
    Compile(#[source] tera::Error),
    #[error("failed to render {name}")]
    Render {
        name: &'static str,
        #[source]
        source: tera::Error,
    },
}

/// Pages served outside `/api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Foam,
    Methods,
    Method,
    Company,
}

impl Page {
    pub fn template(self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Foam => "foam.html",
            Page::Methods => "methods.html",
            Page::Method => "method.html",
            Page::Company => "company.html",
        }
    }
}

#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Compiles the embedded templates, replaced by any same-named `.html`
    /// file found directly under `overrides`.
    pub fn load(overrides: Option<&Path>) -> Result<Self, PageError> {
        let mut sources: BTreeMap<String, String> = BTreeMap::new();

        for file in EmbeddedTemplates::iter() {
            let name = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(name) {
                let text = std::str::from_utf8(&content.data).map_err(|_| {
                    PageError::Encoding {
                        name: name.to_string(),
                    }
                })?;
                sources.insert(name.to_string(), text.to_string());
            }
        }

        if let Some(dir) = overrides {
            let replaced = read_overrides(dir, &mut sources)?;
            info!(dir = %dir.display(), replaced, "template overrides loaded");
        }

        // Added in one batch so `extends` resolves regardless of order.
        let mut tera = Tera::default();
        tera.add_raw_templates(sources).map_err(PageError::Compile)?;

        Ok(Self { tera })
    }

    pub fn render(&self, page: Page, context: &Context) -> Result<String, PageError> {
        let name = page.template();
        self.tera
            .render(name, context)
            .map_err(|source| PageError::Render { name, source })
    }
}

fn read_overrides(
    dir: &Path,
    sources: &mut BTreeMap<String, String>,
) -> Result<usize, PageError> {
    let io_error = |source| PageError::OverrideIo {
        path: dir.to_path_buf(),
        source,
    };

    let mut replaced = 0;
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        let text = fs::read_to_string(&path).map_err(|source| PageError::OverrideIo {
            path: path.clone(),
            source,
        })?;
        debug!(template = name, "using template override");
        sources.insert(name.to_string(), text);
        replaced += 1;
    }

    Ok(replaced)
}
