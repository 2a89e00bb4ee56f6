//! CSV Export
//!
//! Report tables rendered as CSV text. The header line is plain
//! comma-joined text; every data cell is quoted. Rows end with a bare `\n`.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::models::{InventoryItem, Transaction};
use crate::pricing::{inventory_value, item_price};
use crate::spending::ItemSpending;
use crate::time::format_timestamp;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to download")]
    Empty,
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

pub const INVENTORY_HEADERS: [&str; 12] = [
    "Item ID",
    "Item Name",
    "Part Number",
    "Description",
    "Current Quantity",
    "Minimum Count",
    "Unit",
    "Manufacturer",
    "Type",
    "Test Area",
    "Project Name",
    "Life Cycle",
];

pub const SPENDING_INVENTORY_HEADERS: [&str; 9] = [
    "Item ID",
    "Name",
    "Part Number",
    "Description",
    "Project Name",
    "Test Area",
    "Current Quantity",
    "Unit Price",
    "Total Value",
];

pub const SPENDING_TRANSACTION_HEADERS: [&str; 10] = [
    "Name",
    "Part Number",
    "Description",
    "Project Name",
    "Test Area",
    "Unit Price",
    "Total Quantity Used",
    "Total Spending",
    "Transaction Count",
    "Date Range",
];

pub const CUSTOMIZED_HEADERS: [&str; 11] = [
    "Transaction ID",
    "Date & Time",
    "Transaction Type",
    "Employee Name",
    "Item Name",
    "Part Number",
    "Description",
    "Quantity",
    "Fixture",
    "Test Area",
    "Project Name",
];

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn text_or_na(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE).to_string()
}

/// Write a header row plus records; empty record sets are rejected
pub fn to_csv<I, R>(headers: &[&str], rows: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut rows = rows.into_iter().peekable();
    if rows.peek().is_none() {
        return Err(ExportError::Empty);
    }

    let mut header = headers.join(",");
    header.push('\n');
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(header.into_bytes());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

/// Current inventory and low-stock tables
pub fn inventory_csv(items: &[InventoryItem]) -> Result<String, ExportError> {
    let rows = items.iter().map(|item| {
        vec![
            item.item_id.to_string(),
            item.item_name.clone(),
            text(item.item_part_number.as_deref()),
            text(item.item_description.as_deref()),
            item.item_current_quantity.to_string(),
            item.item_min_count.to_string(),
            text(item.item_unit.as_deref()),
            text(item.item_manufacturer.as_deref()),
            text(item.item_type.as_deref()),
            text(item.test_area.as_deref()),
            text(item.project_name.as_deref()),
            item.item_life_cycle.map(|c| c.to_string()).unwrap_or_default(),
        ]
    });
    to_csv(&INVENTORY_HEADERS, rows)
}

/// Inventory value view; items without a usable price are left out
pub fn spending_inventory_csv(items: &[InventoryItem]) -> Result<String, ExportError> {
    if items.is_empty() {
        return Err(ExportError::Empty);
    }
    let rows = items.iter().filter(|item| item_price(item) > 0.0).map(|item| {
        vec![
            item.item_id.to_string(),
            item.item_name.clone(),
            text(item.item_part_number.as_deref()),
            text_or_na(item.item_description.as_deref()),
            text_or_na(item.project_name.as_deref()),
            text_or_na(item.test_area.as_deref()),
            item.item_current_quantity.to_string(),
            text_or_na(item.item_unit_price.as_deref()),
            format!("{:.2}", inventory_value(item)),
        ]
    });
    to_csv(&SPENDING_INVENTORY_HEADERS, rows)
}

pub fn spending_transactions_csv(rows: &[ItemSpending]) -> Result<String, ExportError> {
    let records = rows.iter().map(|row| {
        vec![
            row.item_name.clone(),
            row.part_number.clone(),
            row.description.clone(),
            row.project_name.clone(),
            row.test_area.clone(),
            text_or_na(row.unit_price.as_deref()),
            row.net_quantity().to_string(),
            format!("{:.2}", row.net_spending()),
            row.transaction_count.to_string(),
            row.date_range(),
        ]
    });
    to_csv(&SPENDING_TRANSACTION_HEADERS, records)
}

pub fn customized_csv(transactions: &[Transaction]) -> Result<String, ExportError> {
    let rows = transactions.iter().map(|tx| {
        vec![
            tx.transaction_id.to_string(),
            format_timestamp(&tx.created_at),
            tx.transaction_type.clone(),
            text(tx.employee_name.as_deref()),
            text(tx.item_name.as_deref()),
            text(tx.item_part_number.as_deref()),
            text(tx.item_description.as_deref()),
            tx.quantity_used.to_string(),
            text(tx.fixture_name.as_deref()),
            text(tx.test_area.as_deref()),
            text(tx.project_name.as_deref()),
        ]
    });
    to_csv(&CUSTOMIZED_HEADERS, rows)
}

/// `{prefix}_{YYYY-MM-DD}.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, price: Option<&str>) -> InventoryItem {
        InventoryItem {
            item_id: id,
            item_name: name.to_string(),
            item_description: Some("says \"hi\"".to_string()),
            item_part_number: None,
            item_current_quantity: 4,
            item_min_count: 1,
            item_unit: Some("pcs".to_string()),
            item_unit_price: price.map(str::to_string),
            item_manufacturer: None,
            item_type: Some("part".to_string()),
            test_area: Some("TOOLS".to_string()),
            project_name: Some("Athena".to_string()),
            item_life_cycle: Some(12),
            item_image_url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_inventory_csv_quotes_every_cell() {
        let csv = inventory_csv(&[make_item(3, "Probe, long", None)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], INVENTORY_HEADERS.join(","));
        assert_eq!(
            lines[1],
            r#""3","Probe, long","","says ""hi""","4","1","pcs","","part","TOOLS","Athena","12""#
        );
        assert!(csv.ends_with('\n'));
        assert!(!csv.contains('\r'));
    }

    #[test]
    fn test_empty_export_is_rejected() {
        let err = inventory_csv(&[]).unwrap_err();
        assert_eq!(err.to_string(), "No data to download");
    }

    #[test]
    fn test_spending_inventory_skips_unpriced() {
        let items = vec![make_item(1, "Probe", Some("$2.50")), make_item(2, "Cable", None)];
        let csv = spending_inventory_csv(&items).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("\"$2.50\",\"10.00\""));
    }

    #[test]
    fn test_spending_inventory_blank_location_is_na() {
        let mut item = make_item(5, "Probe", Some("$1"));
        item.item_description = None;
        item.project_name = Some(String::new());
        item.test_area = None;
        let csv = spending_inventory_csv(&[item]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], SPENDING_INVENTORY_HEADERS.join(","));
        assert_eq!(lines[1], r#""5","Probe","","N/A","N/A","N/A","4","$1","4.00""#);
    }

    #[test]
    fn test_spending_transactions_csv_row() {
        let at = crate::time::parse_timestamp("2024-03-05T08:00:00");
        let row = ItemSpending {
            item_name: "Probe".to_string(),
            part_number: "P-1".to_string(),
            description: "N/A".to_string(),
            project_name: "Athena".to_string(),
            test_area: "TOOLS".to_string(),
            unit_price: None,
            requested: 5,
            returned: 2,
            transaction_count: 2,
            earliest: at,
            latest: at,
        };
        let csv = spending_transactions_csv(&[row]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Name,Part Number,Description,Project Name,Test Area,Unit Price,Total Quantity Used,Total Spending,Transaction Count,Date Range"
        );
        assert_eq!(
            lines[1],
            r#""Probe","P-1","N/A","Athena","TOOLS","N/A","3","0.00","2","03/05/24 8:00 AM""#
        );
    }

    #[test]
    fn test_customized_csv_row() {
        let tx = Transaction {
            transaction_id: 42,
            item_id: 1,
            fixture_id: 7,
            employee_id: 3,
            transaction_type: "request".to_string(),
            quantity_used: 6,
            created_at: "2024-03-05T14:30:00".to_string(),
            remarks: None,
            item_name: Some("Probe".to_string()),
            item_part_number: None,
            item_description: Some("Pogo pin".to_string()),
            item_manufacturer: None,
            item_unit_price: None,
            item_image_url: None,
            test_area: Some("ICT_Mobo".to_string()),
            project_name: Some("Gulp".to_string()),
            fixture_name: Some("FX-7".to_string()),
            employee_name: Some("Dana Lee".to_string()),
            remaining_quantity: None,
        };
        let csv = customized_csv(&[tx]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CUSTOMIZED_HEADERS.join(","));
        assert!(lines[0].starts_with("Transaction ID,Date & Time,Transaction Type"));
        assert_eq!(
            lines[1],
            r#""42","2024-03-05 14:30","request","Dana Lee","Probe","","Pogo pin","6","FX-7","ICT_Mobo","Gulp""#
        );
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(export_file_name("low_stock_report", date), "low_stock_report_2024-03-05.csv");
    }
}
