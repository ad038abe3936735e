//! JSON catalog import.
//!
//! A catalog file lists brands, their devices, and each device's flat
//! specification rows:
//!
//! ```json
//! {
//!   "brands": [
//!     {
//!       "id": "apple",
//!       "name": "Apple",
//!       "devices": [
//!         {
//!           "id": "apple_iphone_15-12559",
//!           "name": "iPhone 15",
//!           "specifications": [
//!             { "category": "Display", "field": "Size", "value": "6.1 inches" }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::error::{Result, ScrapeError};
use crate::scraper::{DeviceGateway, ScrapeSummary};
use async_trait::async_trait;
use serde::Deserialize;
use specdex_core::{Brand, Device, SpecificationRecord};
use specdex_db::Database;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A parsed catalog document.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    /// Brands in document order
    pub brands: Vec<CatalogBrand>,
}

/// One brand and the devices listed under it.
#[derive(Debug, Deserialize)]
pub struct CatalogBrand {
    /// Brand id
    pub id: String,
    /// Display name
    pub name: String,
    /// Devices of this brand
    #[serde(default)]
    pub devices: Vec<CatalogDevice>,
}

/// One device entry.
#[derive(Debug, Deserialize)]
pub struct CatalogDevice {
    /// Device id
    pub id: String,
    /// Display name
    pub name: String,
    /// Flat specification rows, stored in this order
    #[serde(default)]
    pub specifications: Vec<SpecificationRecord>,
}

impl Catalog {
    /// Parse and check a catalog document.
    pub fn from_json(contents: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        for brand in &self.brands {
            if brand.id.trim().is_empty() {
                return Err(ScrapeError::InvalidCatalog(format!(
                    "brand '{}' has an empty id",
                    brand.name
                )));
            }
            for device in &brand.devices {
                if device.id.trim().is_empty() {
                    return Err(ScrapeError::InvalidCatalog(format!(
                        "device '{}' of brand '{}' has an empty id",
                        device.name, brand.id
                    )));
                }
                let blank_label = device
                    .specifications
                    .iter()
                    .any(|s| s.category.is_empty() || s.field.is_empty());
                if blank_label {
                    return Err(ScrapeError::InvalidCatalog(format!(
                        "device '{}' has a specification with an empty category or field",
                        device.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Imports a JSON catalog file into the store.
///
/// `open` reads and validates the file, `parse_devices` writes it one device
/// per transaction, `close` drops the loaded document.
pub struct CatalogImporter {
    path: PathBuf,
    db: Arc<Database>,
    loaded: Mutex<Option<Catalog>>,
}

impl CatalogImporter {
    /// Create an importer for the catalog at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, db: Arc<Database>) -> Self {
        Self {
            path: path.into(),
            db,
            loaded: Mutex::new(None),
        }
    }

    /// Catalog file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DeviceGateway for CatalogImporter {
    async fn open(&self) -> Result<()> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| ScrapeError::CatalogRead {
                    path: self.path.display().to_string(),
                    source,
                })?;
        let catalog = Catalog::from_json(&contents)?;

        tracing::info!(
            "Opened catalog {} ({} brands)",
            self.path.display(),
            catalog.brands.len()
        );
        *self.loaded.lock().await = Some(catalog);
        Ok(())
    }

    async fn parse_devices(&self) -> Result<ScrapeSummary> {
        let guard = self.loaded.lock().await;
        let catalog = guard.as_ref().ok_or(ScrapeError::GatewayClosed)?;

        let mut summary = ScrapeSummary::default();
        for entry in &catalog.brands {
            // Brands only reach the store through their devices.
            if entry.devices.is_empty() {
                tracing::debug!("Skipping brand {} with no devices", entry.id);
                continue;
            }
            let brand = Brand {
                id: entry.id.clone(),
                name: entry.name.clone(),
            };
            for device_entry in &entry.devices {
                let device = Device {
                    id: device_entry.id.clone(),
                    name: device_entry.name.clone(),
                    brand_id: brand.id.clone(),
                };
                self.db
                    .save_device(&brand, &device, &device_entry.specifications)
                    .await?;
                summary.devices += 1;
                summary.specifications += device_entry.specifications.len();
            }
            summary.brands += 1;
        }

        Ok(summary)
    }

    async fn close(&self) -> Result<()> {
        self.loaded.lock().await.take();
        tracing::debug!("Closed catalog {}", self.path.display());
        Ok(())
    }
}
