//! Shared application state handed to every handler.

use crate::catalog::CatalogService;
use specdex_scraper::RefreshTrigger;

/// State injected into handlers through `axum::extract::State`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-side queries
    pub catalog: CatalogService,
    /// Background refresh starter
    pub refresh: RefreshTrigger,
}

impl AppState {
    /// Bundle the query service and the refresh trigger.
    #[must_use]
    pub fn new(catalog: CatalogService, refresh: RefreshTrigger) -> Self {
        Self { catalog, refresh }
    }
}
