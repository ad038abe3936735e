//! Wire shapes of the HTTP API.

use serde::{Deserialize, Serialize};
use specdex_core::{Brand, Device, GroupedSpecification};

/// Search hit. Carries no brand id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub id: String,
    pub name: String,
}

impl From<Device> for DeviceSummary {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            name: device.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceResponse {
    pub id: String,
    pub name: String,
    pub brand_id: String,
}

impl From<Device> for DeviceResponse {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            name: device.name,
            brand_id: device.brand_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandResponse {
    pub id: String,
    pub name: String,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
        }
    }
}

/// Device, brand and grouped specifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDetailResponse {
    pub device: DeviceResponse,
    pub brand: BrandResponse,
    pub specifications: GroupedSpecification,
}

/// One page of brands plus the overall count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandsPage {
    #[serde(rename = "totalBrands")]
    pub total_brands: i64,
    pub brands: Vec<BrandResponse>,
    pub page: u32,
    /// The requested limit, not the number of brands returned
    pub size: u32,
}

/// Query string of `GET /brands`.
#[derive(Debug, Default, Deserialize)]
pub struct BrandsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Acknowledgment of `GET /update_db`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
