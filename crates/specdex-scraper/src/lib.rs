//! Specdex refresh jobs.
//!
//! A refresh rewrites the device store from an upstream source. This crate
//! holds the pieces involved:
//!
//! - [`Scraper`]: one complete refresh run
//! - [`DeviceGateway`] and [`GatewayScraper`]: sources with an open / parse /
//!   close lifecycle, closed even when parsing fails
//! - [`CatalogImporter`]: a gateway reading a local JSON catalog
//! - [`RefreshTrigger`]: starts runs in the background and only logs outcomes
//!
//! # Example
//!
//! ```ignore
//! use specdex_scraper::{CatalogImporter, GatewayScraper, RefreshTrigger};
//! use std::sync::Arc;
//!
//! let importer = CatalogImporter::new("catalog.json", db.clone());
//! let trigger = RefreshTrigger::new(Arc::new(GatewayScraper::new(importer)));
//! let run_id = trigger.trigger();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
#[allow(missing_docs)]
pub mod error;
pub mod scraper;
pub mod trigger;

pub use catalog::{Catalog, CatalogImporter};
pub use error::{Result, ScrapeError};
pub use scraper::{DeviceGateway, GatewayScraper, ScrapeSummary, Scraper};
pub use trigger::RefreshTrigger;
