//! Specdex Database Layer
//!
//! Provides `SQLite` access to the device catalog: brands, devices and their
//! flat specification rows.
//!
//! # Architecture
//!
//! - **Migrations**: SQL migrations are embedded and versioned using `SQLx`
//! - **Connection Pooling**: Configurable connection pool (default: 5 connections)
//! - **Read path**: name search, single-query detail fetch, paginated brands
//! - **Write path**: transactional upserts used by refresh jobs
//!
//! # Example
//!
//! ```ignore
//! use specdex_db::Database;
//!
//! let db = Database::new("specdex.db", 5).await?;
//! db.run_migrations().await?;
//! let devices = specdex_db::devices::search_by_name(db.pool(), "galaxy", 25).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod brands;
pub mod connection;
pub mod devices;
pub mod error;
pub mod migrations;

// Re-export commonly used types
pub use connection::StorePool;
pub use devices::DeviceDetailRecord;
pub use error::{DatabaseError, Result};

use specdex_core::{Brand, Device, SpecificationRecord};
use std::path::Path;

/// High-level database interface.
///
/// This wraps a `StorePool` and handles initialization and migration.
#[derive(Debug, Clone)]
pub struct Database {
    pool: StorePool,
}

impl Database {
    /// Open a database connection pool.
    ///
    /// # Arguments
    /// * `path` - Path to the database file (or `:memory:` for in-memory)
    /// * `max_connections` - Upper bound on pooled connections
    ///
    /// # Errors
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new(path: impl AsRef<Path>, max_connections: u32) -> Result<Self> {
        let pool = StorePool::new(path, max_connections).await?;
        Ok(Self { pool })
    }

    /// Run all pending database migrations.
    ///
    /// # Errors
    /// Returns `DatabaseError::Migration` if any migration fails.
    pub async fn run_migrations(&self) -> Result<()> {
        migrations::run_migrations(self.pool.pool()).await
    }

    /// Get the current schema version.
    ///
    /// # Errors
    /// Returns `DatabaseError` if the version cannot be queried.
    pub async fn get_schema_version(&self) -> Result<i64> {
        migrations::get_schema_version(self.pool.pool()).await
    }

    /// Get a reference to the underlying connection pool.
    ///
    /// This allows direct access to the `SQLx` pool for custom queries.
    #[must_use]
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Sqlite> {
        self.pool.pool()
    }

    /// Verify that the database is reachable.
    ///
    /// # Errors
    /// Returns `DatabaseError::Open` if the database does not answer.
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    /// Close the database connection gracefully.
    pub async fn close(self) {
        self.pool.close().await;
    }

    /// Write a device, its brand and its specifications in one transaction.
    ///
    /// The brand is upserted first, the device second, and the device's
    /// previous specification rows are replaced by `specifications`.
    ///
    /// # Errors
    /// Returns `DatabaseError` if any statement fails; nothing is committed
    /// in that case.
    pub async fn save_device(
        &self,
        brand: &Brand,
        device: &Device,
        specifications: &[SpecificationRecord],
    ) -> Result<()> {
        let mut tx = self.pool.pool().begin().await?;

        brands::upsert_brand(&mut tx, brand).await?;
        devices::upsert_device(&mut tx, device).await?;
        devices::replace_specifications(&mut tx, &device.id, specifications).await?;

        tx.commit().await?;

        tracing::debug!(
            "Saved device {} ({} specifications)",
            device.id,
            specifications.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = Database::new(":memory:", 1)
            .await
            .expect("create database");

        db.ping().await.expect("ping database");
    }

    #[tokio::test]
    async fn test_database_migrations() {
        let db = Database::new(":memory:", 1)
            .await
            .expect("create database");

        let version_before = db.get_schema_version().await.expect("get version");
        assert_eq!(version_before, 0);

        db.run_migrations().await.expect("run migrations");

        let version_after = db.get_schema_version().await.expect("get version");
        assert!(version_after > 0);
    }

    #[tokio::test]
    async fn test_database_schema() {
        let db = Database::new(":memory:", 1)
            .await
            .expect("create database");

        db.run_migrations().await.expect("run migrations");

        let columns: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM pragma_table_info('device_specifications') ORDER BY cid",
        )
        .fetch_all(db.pool())
        .await
        .expect("query columns");

        assert_eq!(
            columns,
            vec![
                "id",
                "device_id",
                "spec_category",
                "specification",
                "spec_value"
            ]
        );
    }

    #[tokio::test]
    async fn test_save_device_rolls_back_on_failure() {
        let db = Database::new(":memory:", 1)
            .await
            .expect("create database");
        db.run_migrations().await.expect("run migrations");

        let brand = Brand {
            id: "google".to_string(),
            name: "Google".to_string(),
        };
        // Device points at a brand that is never written.
        let device = Device {
            id: "google_pixel_8-12546".to_string(),
            name: "Pixel 8".to_string(),
            brand_id: "missing".to_string(),
        };

        let result = db.save_device(&brand, &device, &[]).await;
        assert!(result.is_err());

        let brand_count = brands::count_brands(db.pool()).await.expect("count brands");
        assert_eq!(brand_count, 0);
    }

    #[tokio::test]
    async fn test_save_device_replaces_specifications() {
        let db = Database::new(":memory:", 1)
            .await
            .expect("create database");
        db.run_migrations().await.expect("run migrations");

        let brand = Brand {
            id: "google".to_string(),
            name: "Google".to_string(),
        };
        let device = Device {
            id: "google_pixel_8-12546".to_string(),
            name: "Pixel 8".to_string(),
            brand_id: "google".to_string(),
        };

        db.save_device(
            &brand,
            &device,
            &[SpecificationRecord::new("Display", "Size", "6.2 inches")],
        )
        .await
        .expect("first save");
        db.save_device(
            &brand,
            &device,
            &[SpecificationRecord::new("Display", "Size", "6.3 inches")],
        )
        .await
        .expect("second save");

        let detail = devices::get_device_detail(db.pool(), &device.id)
            .await
            .expect("get device detail");
        assert_eq!(
            detail.specifications,
            vec![SpecificationRecord::new("Display", "Size", "6.3 inches")]
        );
    }

    #[tokio::test]
    async fn test_database_close() {
        let db = Database::new(":memory:", 1)
            .await
            .expect("create database");

        db.close().await; // Should not panic
    }
}
