//! Fire-and-forget refresh runs.

use crate::scraper::Scraper;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Starts scraper runs in the background without waiting for them.
///
/// Every outcome of a run, including a panic inside the scraper, ends in a
/// log line. Nothing is reported back to the caller.
#[derive(Clone)]
pub struct RefreshTrigger {
    scraper: Option<Arc<dyn Scraper>>,
}

impl RefreshTrigger {
    /// Trigger backed by `scraper`.
    #[must_use]
    pub fn new(scraper: Arc<dyn Scraper>) -> Self {
        Self {
            scraper: Some(scraper),
        }
    }

    /// Trigger with no scraper configured. Runs are logged and skipped.
    #[must_use]
    pub fn disabled() -> Self {
        Self { scraper: None }
    }

    /// Whether a scraper is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.scraper.is_some()
    }

    /// Start a refresh run and return its id immediately.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn trigger(&self) -> Uuid {
        let run_id = Uuid::new_v4();

        let Some(scraper) = self.scraper.clone() else {
            tracing::warn!(%run_id, "Refresh requested but no scraper is configured");
            return run_id;
        };

        let span = tracing::info_span!("refresh", %run_id);
        let run = tokio::spawn(async move { scraper.run().await }.instrument(span.clone()));

        tokio::spawn(
            async move {
                match run.await {
                    Ok(Ok(summary)) => tracing::info!("Refresh finished: {}", summary),
                    Ok(Err(e)) => tracing::error!("Refresh failed: {}", e),
                    Err(e) if e.is_panic() => tracing::error!("Refresh panicked: {}", e),
                    Err(e) => tracing::error!("Refresh task was cancelled: {}", e),
                }
            }
            .instrument(span),
        );

        tracing::debug!(%run_id, "Refresh started");
        run_id
    }
}

impl std::fmt::Debug for RefreshTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTrigger")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
