use std::{fmt, sync::Arc};

use mousse_config::Config;
use mousse_core::CatalogueService;

use crate::pages::PageRenderer;

#[derive(Clone)]
pub struct AppState {
    pub catalogue: Arc<CatalogueService>,
    pub pages: Arc<PageRenderer>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(catalogue: CatalogueService, pages: PageRenderer, config: Config) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            pages: Arc::new(pages),
            config: Arc::new(config),
        }
    }

    pub fn catalogue(&self) -> &CatalogueService {
        &self.catalogue
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
