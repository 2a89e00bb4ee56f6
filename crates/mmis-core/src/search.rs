//! Item search helpers for the request and restock pickers.

use crate::models::InventoryItem;

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

/// Name-only match (request flow)
pub fn matches_name(item: &InventoryItem, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || item.item_name.to_lowercase().contains(&query)
}

/// Name, part number, description or id (restock flow)
pub fn matches_item(item: &InventoryItem, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    item.item_name.to_lowercase().contains(&query)
        || contains_ci(item.item_part_number.as_deref(), &query)
        || contains_ci(item.item_description.as_deref(), &query)
        || item.item_id.to_string().contains(&query)
}

pub fn filter_items(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| matches_item(item, query))
        .cloned()
        .collect()
}

pub fn filter_by_name(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| matches_name(item, query))
        .cloned()
        .collect()
}

/// Exact project / test area match; a blank filter matches everything
pub fn filter_by_location(items: &[InventoryItem], project: &str, test_area: &str) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| project.is_empty() || item.project_name.as_deref() == Some(project))
        .filter(|item| test_area.is_empty() || item.test_area.as_deref() == Some(test_area))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, part: Option<&str>, project: &str, area: &str) -> InventoryItem {
        InventoryItem {
            item_id: id,
            item_name: name.to_string(),
            item_description: Some(format!("{} for fixtures", name)),
            item_part_number: part.map(str::to_string),
            item_current_quantity: 10,
            item_min_count: 2,
            item_unit: None,
            item_unit_price: None,
            item_manufacturer: None,
            item_type: None,
            test_area: Some(area.to_string()),
            project_name: Some(project.to_string()),
            item_life_cycle: None,
            item_image_url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_matches_item_fields() {
        let item = make_item(123, "Pogo Pin", Some("PP-9"), "Athena", "ICT_Mobo");
        assert!(matches_item(&item, ""));
        assert!(matches_item(&item, "pogo"));
        assert!(matches_item(&item, "pp-9"));
        assert!(matches_item(&item, "FIXTURES"));
        assert!(matches_item(&item, "12"));
        assert!(!matches_item(&item, "spring"));
    }

    #[test]
    fn test_matches_name_ignores_part_number() {
        let item = make_item(1, "Pogo Pin", Some("PP-9"), "Athena", "ICT_Mobo");
        assert!(matches_name(&item, " POGO "));
        assert!(!matches_name(&item, "pp-9"));
    }

    #[test]
    fn test_filter_by_location() {
        let items = vec![
            make_item(1, "A", None, "Athena", "ICT_Mobo"),
            make_item(2, "B", None, "Athena", "TOOLS"),
            make_item(3, "C", None, "Gulp", "TOOLS"),
        ];
        assert_eq!(filter_by_location(&items, "", "").len(), 3);
        assert_eq!(filter_by_location(&items, "Athena", "").len(), 2);
        let hits = filter_by_location(&items, "Athena", "TOOLS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item_id, 2);
    }
}
