//! Read-side queries behind the HTTP routes.

use crate::dto::{BrandResponse, BrandsPage, DeviceDetailResponse, DeviceSummary};
use crate::error::ServiceError;
use specdex_core::{group_specifications, normalize_search_query, ApiConfig, PageRequest};
use specdex_db::{brands, devices, Database, DatabaseError};
use std::sync::Arc;

/// Query service over the device store.
#[derive(Debug, Clone)]
pub struct CatalogService {
    db: Arc<Database>,
    api: ApiConfig,
}

impl CatalogService {
    /// Create a service over `db` with the given API limits.
    #[must_use]
    pub fn new(db: Arc<Database>, api: ApiConfig) -> Self {
        Self { db, api }
    }

    /// API limits in effect.
    #[must_use]
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Devices whose name contains `query`, ignoring ASCII case.
    ///
    /// # Errors
    /// `Validation` for a blank or overlong query, `NotFound` when nothing
    /// matches.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<DeviceSummary>, ServiceError> {
        let query = normalize_search_query(query, self.api.max_query_len)?;

        let found = devices::search_by_name(self.db.pool(), &query, self.api.search_limit).await?;
        if found.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No devices found matching '{query}'"
            )));
        }

        tracing::debug!("Search {:?} matched {} devices", query, found.len());
        Ok(found.into_iter().map(DeviceSummary::from).collect())
    }

    /// A device with its brand and specifications grouped by category.
    ///
    /// # Errors
    /// `NotFound` when no device has this id.
    pub async fn get_device_detail(
        &self,
        device_id: &str,
    ) -> Result<DeviceDetailResponse, ServiceError> {
        let record = devices::get_device_detail(self.db.pool(), device_id).await?;

        Ok(DeviceDetailResponse {
            specifications: group_specifications(&record.specifications),
            device: record.device.into(),
            brand: record.brand.into(),
        })
    }

    /// One page of brands and the total brand count.
    ///
    /// # Errors
    /// `Validation` for a page below 1 or a limit outside
    /// `1..=max_page_size`.
    pub async fn list_brands(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<BrandsPage, ServiceError> {
        let request = PageRequest::new(
            page.unwrap_or(1),
            limit.unwrap_or_else(|| i64::from(self.api.default_page_size)),
            self.api.max_page_size,
        )?;

        let total_brands = brands::count_brands(self.db.pool())
            .await
            .map_err(DatabaseError::from)?;
        let page_brands = brands::list_brands(self.db.pool(), request)
            .await
            .map_err(DatabaseError::from)?;

        Ok(BrandsPage {
            total_brands,
            brands: page_brands.into_iter().map(BrandResponse::from).collect(),
            page: request.page(),
            size: request.limit(),
        })
    }
}
