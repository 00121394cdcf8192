use std::sync::Arc;

use crate::catalog::TemplateCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<TemplateCatalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: TemplateCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }
}
