//! Backend Models
//!
//! Data structures matching the MMIS REST API. Field names follow the
//! backend's JSON exactly.

use serde::{Deserialize, Deserializer, Serialize};

/// Inventory item (matches backend `InventoryOut`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_id: u32,
    pub item_name: String,
    #[serde(default)]
    pub item_description: Option<String>,
    #[serde(default)]
    pub item_part_number: Option<String>,
    #[serde(default)]
    pub item_current_quantity: i32,
    #[serde(default)]
    pub item_min_count: i32,
    #[serde(default)]
    pub item_unit: Option<String>,
    #[serde(default, deserialize_with = "price_text")]
    pub item_unit_price: Option<String>,
    #[serde(default)]
    pub item_manufacturer: Option<String>,
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub test_area: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub item_life_cycle: Option<i32>,
    #[serde(default)]
    pub item_image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Test fixture (matches backend `FixtureOut`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub fixture_id: u32,
    pub fixture_name: String,
    #[serde(default)]
    pub test_area: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub asset_tag: Option<String>,
    #[serde(default)]
    pub fixture_serial_number: Option<String>,
}

/// Stock movement with the joined item/fixture/employee columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: u32,
    pub item_id: u32,
    pub fixture_id: u32,
    pub employee_id: u32,
    pub transaction_type: String,
    pub quantity_used: i32,
    pub created_at: String,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub item_part_number: Option<String>,
    #[serde(default)]
    pub item_description: Option<String>,
    #[serde(default)]
    pub item_manufacturer: Option<String>,
    #[serde(default, deserialize_with = "price_text")]
    pub item_unit_price: Option<String>,
    #[serde(default)]
    pub item_image_url: Option<String>,
    #[serde(default)]
    pub test_area: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub fixture_name: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    /// For requests: quantity that can still be returned
    #[serde(default)]
    pub remaining_quantity: Option<i32>,
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::parse(&self.transaction_type)
    }

    /// Upper bound for a return: what is still out, else what was taken
    pub fn returnable_quantity(&self) -> i32 {
        self.remaining_quantity.unwrap_or(self.quantity_used)
    }
}

/// Transaction type, parsed case-insensitively
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Request,
    Return,
    Restock,
    Transfer,
    Other(String),
}

impl TransactionKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "request" => Self::Request,
            "return" => Self::Return,
            "restock" => Self::Restock,
            "transfer" => Self::Transfer,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Request => "request",
            Self::Return => "return",
            Self::Restock => "restock",
            Self::Transfer => "transfer",
            Self::Other(raw) => raw,
        }
    }
}

/// Employee profile (matches backend `EmployeeOut`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: u32,
    pub employee_name: String,
    pub employee_access_level: String,
    #[serde(default)]
    pub employee_badge_number: Option<String>,
    #[serde(default)]
    pub employee_designation: Option<String>,
    #[serde(default)]
    pub employee_shift: Option<String>,
    #[serde(default)]
    pub employee_username: Option<String>,
    #[serde(default)]
    pub employee_email: Option<String>,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInventoryItem {
    pub item_name: String,
    pub project_name: Option<String>,
    pub item_part_number: Option<String>,
    pub item_description: Option<String>,
    pub test_area: Option<String>,
    pub item_unit: Option<String>,
    pub item_current_quantity: i32,
    pub item_unit_price: Option<String>,
    pub item_min_count: i32,
    pub item_manufacturer: Option<String>,
    pub item_type: Option<String>,
    pub item_life_cycle: Option<i32>,
    pub item_image_url: Option<String>,
    /// Recorded in the activity history
    pub employee_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryUpdate {
    pub item_name: String,
    pub item_part_number: Option<String>,
    pub item_description: Option<String>,
    pub test_area: Option<String>,
    pub project_name: Option<String>,
    pub item_unit: Option<String>,
    pub item_min_count: i32,
    pub item_manufacturer: Option<String>,
    pub item_type: Option<String>,
    pub item_life_cycle: i32,
    pub item_unit_price: Option<String>,
    pub item_image_url: Option<String>,
    /// Ignored by the backend; stock only moves through restock/request/return
    pub item_current_quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestPayload {
    pub employee_id: u32,
    pub item_id: u32,
    pub fixture_id: u32,
    pub quantity: i32,
    pub test_area: Option<String>,
    pub project_name: Option<String>,
    pub transaction_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnPayload {
    pub item_id: u32,
    pub employee_id: u32,
    pub fixture_id: u32,
    pub quantity_used: i32,
    pub remarks: Option<String>,
    pub transaction_type: String,
    pub test_area: Option<String>,
    pub project_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestockPayload {
    pub item_id: u32,
    pub quantity: i32,
    pub remarks: String,
    pub employee_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferPayload {
    pub source_item_id: u32,
    pub dest_item_id: u32,
    pub quantity: i32,
    pub employee_id: u32,
    pub fixture_id: u32,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFixture {
    pub fixture_name: String,
    pub project_name: String,
    pub test_area: String,
    pub employee_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureUpdate {
    pub fixture_name: String,
    pub project_name: String,
    pub test_area: String,
    pub asset_tag: String,
    pub fixture_serial_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageUploadResponse {
    pub image_url: String,
}

/// Low-stock endpoint body. Older backends answer with a summary object
/// instead of the item list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LowStockResponse {
    Items(Vec<InventoryItem>),
    Summary {
        #[serde(default)]
        low_stock: Vec<String>,
        #[serde(default)]
        count: usize,
    },
}

impl LowStockResponse {
    pub fn into_items(self) -> Vec<InventoryItem> {
        match self {
            Self::Items(items) => items,
            Self::Summary { .. } => Vec::new(),
        }
    }
}

// ========================
// Query Filters
// ========================

/// Filters accepted by `/transactions/all`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub project: String,
    pub test_area: String,
    pub transaction_type: String,
    pub start_date: String,
    pub end_date: String,
}

impl TransactionFilter {
    /// Non-empty filters as query pairs, in backend parameter names
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("project", &self.project),
            ("test_area", &self.test_area),
            ("transaction_type", &self.transaction_type),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key, value.trim().to_string()))
        .collect()
    }
}

/// Location filters accepted by `/inventory/` and `/alerts/low-stock`
pub fn location_query(project: &str, test_area: &str) -> Vec<(&'static str, String)> {
    [("project", project), ("test_area", test_area)]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key, value.trim().to_string()))
        .collect()
}

/// The backend serializes prices as strings, but older rows come back as numbers
fn price_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(f64),
    }

    Ok(Option::<Price>::deserialize(deserializer)?.map(|price| match price {
        Price::Text(text) => text,
        Price::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_item_accepts_numeric_price() {
        let json = r#"{
            "item_id": 7,
            "item_name": "Probe",
            "item_current_quantity": 3,
            "item_min_count": 5,
            "item_unit_price": 12.5
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_unit_price.as_deref(), Some("12.5"));
        assert_eq!(item.item_part_number, None);
    }

    #[test]
    fn test_returnable_quantity_prefers_remaining() {
        let json = r#"{"transaction_id": 8, "item_id": 2, "fixture_id": 1, "employee_id": 5,
            "transaction_type": "request", "quantity_used": 10, "created_at": "2024-03-05T08:00:00"}"#;
        let mut tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.returnable_quantity(), 10);
        tx.remaining_quantity = Some(3);
        assert_eq!(tx.returnable_quantity(), 3);
        assert!(crate::validation::validate_return("4", tx.returnable_quantity()).is_err());
        assert_eq!(crate::validation::validate_return("3", tx.returnable_quantity()), Ok(3));
    }

    #[test]
    fn test_transaction_kind_is_case_insensitive() {
        assert_eq!(TransactionKind::parse("Request"), TransactionKind::Request);
        assert_eq!(TransactionKind::parse("RETURN"), TransactionKind::Return);
        assert_eq!(
            TransactionKind::parse("adjust"),
            TransactionKind::Other("adjust".to_string())
        );
    }

    #[test]
    fn test_low_stock_summary_yields_no_items() {
        let body = r#"{"low_stock": ["Probe"], "count": 1}"#;
        let parsed: LowStockResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.into_items().is_empty());

        let body = r#"[{"item_id": 1, "item_name": "Probe"}]"#;
        let parsed: LowStockResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_items().len(), 1);
    }

    #[test]
    fn test_transaction_filter_skips_blank_fields() {
        let filter = TransactionFilter {
            project: "Astoria".into(),
            test_area: "  ".into(),
            start_date: "2024-01-01".into(),
            ..Default::default()
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("project", "Astoria".to_string()),
                ("start_date", "2024-01-01".to_string())
            ]
        );
    }

    #[test]
    fn test_request_payload_omits_missing_remarks() {
        let payload = RequestPayload {
            employee_id: 1,
            item_id: 2,
            fixture_id: 3,
            quantity: 4,
            test_area: Some("TOOLS".into()),
            project_name: None,
            transaction_type: "Request".into(),
            remarks: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("remarks").is_none());
        assert_eq!(json["project_name"], serde_json::Value::Null);
    }
}
