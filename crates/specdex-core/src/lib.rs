//! Specdex Core - Foundation crate for the Specdex device catalog service.
//!
//! This crate provides shared domain types, error handling, configuration
//! management, and the two pure transformations the API is built on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Catalog entities (`Brand`, `Device`, `SpecificationRecord`)
//! - [`pagination`] - Validated page requests and limit/offset slicing
//! - [`specs`] - Grouping of flat specification rows into category maps
//!
//! # Example
//!
//! ```rust
//! use specdex_core::{group_specifications, SpecificationRecord};
//!
//! let rows = vec![
//!     SpecificationRecord::new("Display", "Size", "6.1 inches"),
//!     SpecificationRecord::new("Battery", "Type", "Li-Ion 3349 mAh"),
//! ];
//! let grouped = group_specifications(&rows);
//! assert_eq!(grouped["Display"]["Size"], "6.1 inches");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod pagination;
pub mod specs;
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, AppConfig, DatabaseConfig, ScraperConfig, ServerConfig};
pub use error::{ConfigError, ConfigResult, PaginationError, Result, SpecdexError};
pub use pagination::{paginate, PageRequest};
pub use specs::{group_specifications, GroupedSpecification, SpecificationEntry};
pub use types::{normalize_search_query, Brand, Device, SpecificationRecord};
