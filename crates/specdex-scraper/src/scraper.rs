//! The seam between Specdex and whatever populates the catalog.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;
use tokio::sync::Mutex;

/// Counts reported by a finished refresh run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Brands written
    pub brands: usize,
    /// Devices written
    pub devices: usize,
    /// Specification rows written
    pub specifications: usize,
}

impl fmt::Display for ScrapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} brands, {} devices, {} specifications",
            self.brands, self.devices, self.specifications
        )
    }
}

/// A full refresh of the device store.
///
/// Implementations own every side effect of a run. Callers only learn
/// whether it succeeded.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Run one refresh to completion.
    async fn run(&self) -> Result<ScrapeSummary>;
}

/// A remote source driven through an explicit open / parse / close lifecycle.
#[async_trait]
pub trait DeviceGateway: Send + Sync {
    /// Acquire whatever connection the source needs.
    async fn open(&self) -> Result<()>;

    /// Walk the source and write every device to the store.
    async fn parse_devices(&self) -> Result<ScrapeSummary>;

    /// Release the connection acquired by [`DeviceGateway::open`].
    async fn close(&self) -> Result<()>;
}

/// Adapts a [`DeviceGateway`] into a [`Scraper`].
///
/// `close` runs even when parsing fails; in that case the parse error is the
/// one reported. Overlapping runs queue up: a gateway holds one connection,
/// so each run owns it from `open` through `close`.
pub struct GatewayScraper<G> {
    gateway: G,
    run_lock: Mutex<()>,
}

impl<G: DeviceGateway> GatewayScraper<G> {
    /// Wrap a gateway.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            run_lock: Mutex::new(()),
        }
    }

    /// Borrow the wrapped gateway.
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

#[async_trait]
impl<G: DeviceGateway> Scraper for GatewayScraper<G> {
    async fn run(&self) -> Result<ScrapeSummary> {
        let _running = self.run_lock.lock().await;
        self.gateway.open().await?;

        let parsed = self.gateway.parse_devices().await;
        let closed = self.gateway.close().await;

        match (parsed, closed) {
            (Ok(summary), Ok(())) => Ok(summary),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                tracing::warn!("Gateway close failed after parse error: {}", close_err);
                Err(e)
            }
        }
    }
}
