//! Inventory Endpoints

use mmis_core::models::{
    location_query, ImageUploadResponse, InventoryItem, InventoryUpdate, NewInventoryItem, RequestPayload,
    RestockPayload, TransferPayload,
};
use reqwest::multipart::{Form, Part};

use super::{ApiClient, ApiError};

/// Raw image bytes picked in the browser
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    fn into_form(self) -> Result<Form, ApiError> {
        let mut part = Part::bytes(self.bytes).file_name(self.name);
        if !self.mime.is_empty() {
            part = part
                .mime_str(&self.mime)
                .map_err(|e| ApiError::Browser(e.to_string()))?;
        }
        Ok(Form::new().part("file", part))
    }
}

impl ApiClient {
    pub async fn list_inventory(&self, project: &str, test_area: &str) -> Result<Vec<InventoryItem>, ApiError> {
        self.get("/inventory/", &location_query(project, test_area))
            .await
    }

    pub async fn get_item(&self, item_id: u32) -> Result<InventoryItem, ApiError> {
        self.get(&format!("/inventory/{}", item_id), &[]).await
    }

    pub async fn create_item(&self, item: &NewInventoryItem) -> Result<InventoryItem, ApiError> {
        self.post("/inventory/", item).await
    }

    pub async fn update_item(&self, item_id: u32, update: &InventoryUpdate) -> Result<InventoryItem, ApiError> {
        self.put(&format!("/inventory/{}", item_id), update).await
    }

    /// Upload an image; with an item id the backend also stores it on that item
    pub async fn upload_image(&self, item_id: Option<u32>, image: ImageFile) -> Result<String, ApiError> {
        let path = match item_id {
            Some(id) => format!("/inventory/upload-image/{}", id),
            None => "/inventory/upload-image".to_string(),
        };
        let response: ImageUploadResponse = self.post_multipart(&path, image.into_form()?).await?;
        Ok(response.image_url)
    }

    pub async fn request_item(&self, payload: &RequestPayload) -> Result<serde_json::Value, ApiError> {
        self.post("/inventory/request", payload).await
    }

    pub async fn restock_item(&self, payload: &RestockPayload) -> Result<serde_json::Value, ApiError> {
        self.post("/inventory/restock", payload).await
    }

    pub async fn transfer_item(&self, payload: &TransferPayload) -> Result<serde_json::Value, ApiError> {
        self.post("/inventory/transfer", payload).await
    }
}
