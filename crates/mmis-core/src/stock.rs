//! Low Stock
//!
//! Finds other inventory records of the same part that hold surplus stock,
//! so a low record can be refilled by transfer instead of a purchase.

use std::cmp::Reverse;

use crate::models::InventoryItem;

pub fn is_low_stock(item: &InventoryItem) -> bool {
    item.item_current_quantity < item.item_min_count
}

/// A record that can give stock to a low-stock record
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub item: InventoryItem,
    /// Units above the record's own minimum
    pub surplus: i32,
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// Same part number when both records have one, otherwise same name
pub fn same_part(a: &InventoryItem, b: &InventoryItem) -> bool {
    match (
        normalized(a.item_part_number.as_deref()),
        normalized(b.item_part_number.as_deref()),
    ) {
        (Some(pa), Some(pb)) => pa == pb,
        _ => a.item_name.trim().eq_ignore_ascii_case(b.item_name.trim()),
    }
}

/// Candidates with surplus, largest surplus first
pub fn find_alternatives(low: &InventoryItem, inventory: &[InventoryItem]) -> Vec<Alternative> {
    let mut alternatives: Vec<Alternative> = inventory
        .iter()
        .filter(|candidate| candidate.item_id != low.item_id)
        .filter(|candidate| same_part(low, candidate))
        .filter_map(|candidate| {
            let surplus = candidate.item_current_quantity - candidate.item_min_count;
            (surplus > 0).then(|| Alternative {
                item: candidate.clone(),
                surplus,
            })
        })
        .collect();
    alternatives.sort_by_key(|alt| (Reverse(alt.surplus), alt.item.item_id));
    alternatives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, part: Option<&str>, current: i32, min: i32) -> InventoryItem {
        InventoryItem {
            item_id: id,
            item_name: name.to_string(),
            item_description: None,
            item_part_number: part.map(str::to_string),
            item_current_quantity: current,
            item_min_count: min,
            item_unit: None,
            item_unit_price: None,
            item_manufacturer: None,
            item_type: None,
            test_area: None,
            project_name: None,
            item_life_cycle: None,
            item_image_url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_is_low_stock() {
        assert!(is_low_stock(&make_item(1, "A", None, 1, 2)));
        assert!(!is_low_stock(&make_item(1, "A", None, 2, 2)));
    }

    #[test]
    fn test_find_alternatives_by_part_number() {
        let low = make_item(1, "Pogo Pin", Some("PP-9"), 1, 10);
        let inventory = vec![
            low.clone(),
            make_item(2, "Pogo pin (blue)", Some(" pp-9 "), 30, 10), // surplus 20
            make_item(3, "Pogo Pin", Some("PP-10"), 50, 0),          // different part
            make_item(4, "Pogo Pin", Some("PP-9"), 8, 10),           // no surplus
            make_item(5, "Pogo", Some("PP-9"), 45, 0),               // surplus 45
        ];
        let alts = find_alternatives(&low, &inventory);
        let ids: Vec<u32> = alts.iter().map(|a| a.item.item_id).collect();
        assert_eq!(ids, vec![5, 2]);
        assert_eq!(alts[0].surplus, 45);
    }

    #[test]
    fn test_find_alternatives_falls_back_to_name() {
        let low = make_item(1, "Cooling Fan", None, 0, 4);
        let inventory = vec![
            make_item(2, "cooling fan ", Some("CF-1"), 10, 2),
            make_item(3, "Cooling Fan", None, 10, 2),
            make_item(4, "Fan", None, 10, 2),
        ];
        let ids: Vec<u32> = find_alternatives(&low, &inventory)
            .iter()
            .map(|a| a.item.item_id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
