//! Spending Report
//!
//! Net spending per item and location: what was requested minus what came
//! back, priced at the item's unit price.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::{InventoryItem, Transaction, TransactionKind};
use crate::pricing::parse_unit_price;
use crate::time::{format_short, parse_timestamp};

const NOT_AVAILABLE: &str = "N/A";

/// One row of the transaction view
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpending {
    pub item_name: String,
    pub part_number: String,
    pub description: String,
    pub project_name: String,
    pub test_area: String,
    pub unit_price: Option<String>,
    pub requested: i32,
    pub returned: i32,
    pub transaction_count: usize,
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
}

impl ItemSpending {
    pub fn net_quantity(&self) -> i32 {
        self.requested - self.returned
    }

    pub fn price(&self) -> f64 {
        parse_unit_price(self.unit_price.as_deref())
    }

    pub fn net_spending(&self) -> f64 {
        let net = self.net_quantity();
        let price = self.price();
        if net > 0 && price > 0.0 {
            f64::from(net) * price
        } else {
            0.0
        }
    }

    pub fn date_range(&self) -> String {
        date_range(self.earliest.as_ref(), self.latest.as_ref())
    }
}

type GroupKey = (String, String, String);

fn or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn non_blank(value: Option<&String>) -> Option<&String> {
    value.filter(|v| !v.is_empty())
}

/// Unit prices from inventory, by full location key and by name alone
struct PriceBook<'a> {
    by_key: HashMap<GroupKey, &'a String>,
    by_name: HashMap<&'a str, &'a String>,
}

impl<'a> PriceBook<'a> {
    fn new(inventory: &'a [InventoryItem]) -> Self {
        let mut by_key = HashMap::new();
        let mut by_name = HashMap::new();
        for item in inventory {
            let Some(price) = non_blank(item.item_unit_price.as_ref()) else {
                continue;
            };
            let key = (
                item.item_name.clone(),
                or_na(item.project_name.as_deref()),
                or_na(item.test_area.as_deref()),
            );
            by_key.insert(key, price);
            by_name.entry(item.item_name.as_str()).or_insert(price);
        }
        Self { by_key, by_name }
    }

    fn lookup(&self, key: &GroupKey) -> Option<String> {
        self.by_key
            .get(key)
            .or_else(|| self.by_name.get(key.0.as_str()))
            .map(|price| price.to_string())
    }
}

/// Aggregate request/return transactions into priced rows, highest spending first
pub fn spending_by_item(transactions: &[Transaction], inventory: &[InventoryItem]) -> Vec<ItemSpending> {
    let prices = PriceBook::new(inventory);
    let mut order: Vec<GroupKey> = Vec::new();
    let mut groups: HashMap<GroupKey, ItemSpending> = HashMap::new();

    for tx in transactions {
        let Some(name) = non_blank(tx.item_name.as_ref()) else {
            continue;
        };
        let kind = tx.kind();
        if !matches!(kind, TransactionKind::Request | TransactionKind::Return) {
            continue;
        }

        let key = (
            name.clone(),
            or_na(tx.project_name.as_deref()),
            or_na(tx.test_area.as_deref()),
        );
        let entry = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            ItemSpending {
                item_name: name.clone(),
                part_number: or_na(tx.item_part_number.as_deref()),
                description: or_na(tx.item_description.as_deref()),
                project_name: key.1.clone(),
                test_area: key.2.clone(),
                unit_price: non_blank(tx.item_unit_price.as_ref())
                    .cloned()
                    .or_else(|| prices.lookup(&key)),
                requested: 0,
                returned: 0,
                transaction_count: 0,
                earliest: None,
                latest: None,
            }
        });

        if entry.unit_price.is_none() {
            entry.unit_price = non_blank(tx.item_unit_price.as_ref()).cloned();
        }

        if let Some(at) = parse_timestamp(&tx.created_at) {
            if entry.earliest.map_or(true, |e| at < e) {
                entry.earliest = Some(at);
            }
            if entry.latest.map_or(true, |l| at > l) {
                entry.latest = Some(at);
            }
        }

        match kind {
            TransactionKind::Request => entry.requested += tx.quantity_used,
            _ => entry.returned += tx.quantity_used,
        }
        entry.transaction_count += 1;
    }

    let mut rows: Vec<ItemSpending> = order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .filter(|row| row.net_quantity() > 0 && row.net_spending() > 0.0)
        .collect();

    rows.sort_by(|a, b| b.net_spending().total_cmp(&a.net_spending()));
    rows
}

pub fn total_spending(rows: &[ItemSpending]) -> f64 {
    rows.iter().map(ItemSpending::net_spending).sum()
}

/// `MM/DD/YY h:MM AM`, or `start - end` when the two instants differ
pub fn date_range(earliest: Option<&NaiveDateTime>, latest: Option<&NaiveDateTime>) -> String {
    match (earliest, latest) {
        (Some(start), Some(end)) if start == end => format_short(start),
        (Some(start), Some(end)) => format!("{} - {}", format_short(start), format_short(end)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tx(id: u32, kind: &str, name: &str, qty: i32, price: Option<&str>, at: &str) -> Transaction {
        Transaction {
            transaction_id: id,
            item_id: 1,
            fixture_id: 1,
            employee_id: 1,
            transaction_type: kind.to_string(),
            quantity_used: qty,
            created_at: at.to_string(),
            remarks: None,
            item_name: Some(name.to_string()),
            item_part_number: None,
            item_description: None,
            item_manufacturer: None,
            item_unit_price: price.map(str::to_string),
            item_image_url: None,
            test_area: Some("TOOLS".to_string()),
            project_name: Some("Athena".to_string()),
            fixture_name: None,
            employee_name: None,
            remaining_quantity: None,
        }
    }

    fn make_item(name: &str, project: Option<&str>, price: &str) -> InventoryItem {
        InventoryItem {
            item_id: 9,
            item_name: name.to_string(),
            item_description: None,
            item_part_number: None,
            item_current_quantity: 5,
            item_min_count: 1,
            item_unit: None,
            item_unit_price: Some(price.to_string()),
            item_manufacturer: None,
            item_type: None,
            test_area: Some("TOOLS".to_string()),
            project_name: project.map(str::to_string),
            item_life_cycle: None,
            item_image_url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_net_spending_subtracts_returns() {
        let txs = vec![
            make_tx(1, "request", "Probe", 10, Some("$2.00"), "2024-03-05T08:00:00"),
            make_tx(2, "return", "Probe", 4, None, "2024-03-06T15:30:00"),
            make_tx(3, "restock", "Probe", 100, None, "2024-03-07T08:00:00"),
        ];
        let rows = spending_by_item(&txs, &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].net_quantity(), 6);
        assert_eq!(rows[0].net_spending(), 12.0);
        assert_eq!(rows[0].transaction_count, 2);
        assert_eq!(rows[0].date_range(), "03/05/24 8:00 AM - 03/06/24 3:30 PM");
        assert_eq!(rows[0].part_number, "N/A");
    }

    #[test]
    fn test_fully_returned_and_unpriced_rows_are_dropped() {
        let txs = vec![
            make_tx(1, "request", "Probe", 3, Some("5"), "2024-03-05T08:00:00"),
            make_tx(2, "return", "Probe", 3, None, "2024-03-05T09:00:00"),
            make_tx(3, "request", "Cable", 3, None, "2024-03-05T08:00:00"),
        ];
        assert!(spending_by_item(&txs, &[]).is_empty());
    }

    #[test]
    fn test_price_falls_back_to_inventory() {
        let txs = vec![
            make_tx(1, "Request", "Probe", 2, None, "2024-03-05T08:00:00"),
            make_tx(2, "request", "Cable", 1, None, "2024-03-05T08:00:00"),
        ];
        let inventory = vec![
            make_item("Probe", Some("Athena"), "$3"),
            make_item("Probe", Some("Gulp"), "$100"),
            make_item("Cable", Some("Gulp"), "$50"),
        ];
        let rows = spending_by_item(&txs, &inventory);
        assert_eq!(rows.len(), 2);
        // Cable has no location match, so the by-name price applies
        assert_eq!(rows[0].item_name, "Cable");
        assert_eq!(rows[0].net_spending(), 50.0);
        assert_eq!(rows[1].net_spending(), 6.0);
        assert_eq!(total_spending(&rows), 56.0);
    }

    #[test]
    fn test_price_fixed_when_group_starts() {
        // Inventory price wins over a later transaction's price
        let txs = vec![
            make_tx(1, "request", "Probe", 2, None, "2024-03-05T08:00:00"),
            make_tx(2, "request", "Probe", 2, Some("$10"), "2024-03-06T08:00:00"),
        ];
        let inventory = vec![make_item("Probe", Some("Athena"), "$3")];
        let rows = spending_by_item(&txs, &inventory);
        assert_eq!(rows[0].unit_price.as_deref(), Some("$3"));
        assert_eq!(rows[0].net_spending(), 12.0);

        // With no inventory price, the later transaction fills the gap
        let rows = spending_by_item(&txs, &[]);
        assert_eq!(rows[0].unit_price.as_deref(), Some("$10"));
        assert_eq!(rows[0].net_spending(), 40.0);
    }

    #[test]
    fn test_date_range_single_instant() {
        let at = parse_timestamp("2024-03-05T13:05:00").unwrap();
        assert_eq!(date_range(Some(&at), Some(&at)), "03/05/24 1:05 PM");
        assert_eq!(date_range(None, None), "N/A");
    }
}
