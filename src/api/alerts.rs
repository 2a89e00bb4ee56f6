//! Low-Stock Alerts

use mmis_core::models::{location_query, InventoryItem, LowStockResponse};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Items below their minimum count, optionally narrowed by location
    pub async fn low_stock(&self, project: &str, test_area: &str) -> Result<Vec<InventoryItem>, ApiError> {
        let response: LowStockResponse = self
            .get("/alerts/low-stock", &location_query(project, test_area))
            .await?;
        Ok(response.into_items())
    }
}
