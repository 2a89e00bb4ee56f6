//! Unit prices are free text on the backend (`"$12.50"`, `"12.5 USD"`).

use crate::models::InventoryItem;

/// Keep digits and dots, then parse the longest numeric prefix.
/// Anything unusable is 0.
pub fn parse_unit_price(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let mut seen_dot = false;
    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .take_while(|c| {
            if *c != '.' {
                return true;
            }
            let first = !seen_dot;
            seen_dot = true;
            first
        })
        .collect();
    numeric.parse::<f64>().ok().filter(|p| p.is_finite()).unwrap_or(0.0)
}

pub fn item_price(item: &InventoryItem) -> f64 {
    parse_unit_price(item.item_unit_price.as_deref())
}

/// Value of stock on hand
pub fn inventory_value(item: &InventoryItem) -> f64 {
    item_price(item) * f64::from(item.item_current_quantity)
}

/// Items with a usable price
pub fn priced_items(items: &[InventoryItem]) -> Vec<InventoryItem> {
    items.iter().filter(|item| item_price(item) > 0.0).cloned().collect()
}

pub fn total_inventory_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(inventory_value).sum()
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_price() {
        assert_eq!(parse_unit_price(Some("$12.50")), 12.5);
        assert_eq!(parse_unit_price(Some("7 USD")), 7.0);
        assert_eq!(parse_unit_price(Some("n/a")), 0.0);
        assert_eq!(parse_unit_price(Some("1.2.3")), 1.2);
        assert_eq!(parse_unit_price(Some(".")), 0.0);
        assert_eq!(parse_unit_price(None), 0.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(3.0), "$3.00");
        assert_eq!(format_money(1234.567), "$1234.57");
    }
}
