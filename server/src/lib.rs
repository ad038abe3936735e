//! Specdex HTTP server
//!
//! Thin shell over the library crates: it wires configuration, the device
//! store and the refresh trigger into an `axum` router. Query logic lives in
//! [`catalog`], storage in `specdex-db`, refresh jobs in `specdex-scraper`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
#[allow(missing_docs)]
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use catalog::CatalogService;
pub use error::{ApiError, ServiceError};
pub use routes::build_router;
pub use state::AppState;

use anyhow::Context;
use specdex_core::AppConfig;
use specdex_db::Database;
use specdex_scraper::{CatalogImporter, GatewayScraper, RefreshTrigger};
use std::sync::Arc;

/// Initialize tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,specdex=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

/// Open the store, run migrations and assemble handler state.
///
/// Refresh runs import `scraper.catalog_path` when it is set and are
/// skipped otherwise.
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let db_path = config
        .database_path()
        .context("failed to resolve database path")?;
    tracing::info!("Opening device store at {}", db_path.display());

    let db = Database::new(&db_path, config.database.max_connections)
        .await
        .with_context(|| format!("failed to open database {}", db_path.display()))?;
    db.run_migrations()
        .await
        .context("failed to run database migrations")?;
    tracing::info!("Schema version {}", db.get_schema_version().await?);
    let db = Arc::new(db);

    let refresh = match &config.scraper.catalog_path {
        Some(path) => {
            tracing::info!("Refresh imports catalog {}", path.display());
            let importer = CatalogImporter::new(path, Arc::clone(&db));
            RefreshTrigger::new(Arc::new(GatewayScraper::new(importer)))
        }
        None => {
            tracing::warn!("No scraper.catalog_path configured; /update_db will not refresh");
            RefreshTrigger::disabled()
        }
    };

    let catalog = CatalogService::new(db, config.api.clone());
    Ok(AppState::new(catalog, refresh))
}
