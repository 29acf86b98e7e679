//! Inventory stat cards and the critical-stock alert.

use serde::Serialize;

use industrialerp_core::aggregate::{count_where, distinct_count, sum_money};
use industrialerp_core::{Money, Summarize};

use crate::item::InventoryItem;
use crate::stock::StockSeverity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    /// Sum of the recorded `total_value` column.
    pub total_value: Money,
    /// Critical or low.
    pub low_stock: usize,
    pub critical: usize,
    pub locations: usize,
    pub units_in_stock: u64,
}

impl Summarize for InventoryItem {
    type Summary = InventorySummary;

    fn summarize(records: &[Self]) -> InventorySummary {
        InventorySummary {
            total_products: records.len(),
            total_value: sum_money(records, |i| i.total_value),
            low_stock: count_where(records, |i| i.severity().needs_restock()),
            critical: count_where(records, |i| i.severity() == StockSeverity::Critical),
            locations: distinct_count(records, |i| i.location.as_str()),
            units_in_stock: records.iter().map(|i| u64::from(i.current_stock)).sum(),
        }
    }
}

/// Items classified critical, in list order.
pub fn critical_items(records: &[InventoryItem]) -> Vec<&InventoryItem> {
    records
        .iter()
        .filter(|i| i.severity() == StockSeverity::Critical)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{InventoryCategory, fixtures};

    #[test]
    fn sample_summary() {
        let items = fixtures::sample();
        let summary = InventoryItem::summarize(&items);

        assert_eq!(summary.total_products, 4);
        // 12,825 + 5,625 + 9,900 + 6,675
        assert_eq!(summary.total_value, Money::from_units(35_025));
        assert_eq!(summary.low_stock, 2);
        assert_eq!(summary.critical, 0);
        assert_eq!(summary.locations, 4);
        assert_eq!(summary.units_in_stock, 306);
        assert!(critical_items(&items).is_empty());
    }

    #[test]
    fn critical_alert_keeps_list_order() {
        let mut items = fixtures::sample();
        items.push(fixtures::item(
            "SKU-005",
            "Tornillería M8",
            InventoryCategory::Tools,
            (10, 40, 400),
            "Almacén A-1",
            50,
        ));
        items.push(fixtures::item(
            "SKU-006",
            "Rodamientos 6204",
            InventoryCategory::SpareParts,
            (5, 10, 60),
            "Almacén A-2",
            900,
        ));

        let critical: Vec<_> = critical_items(&items)
            .into_iter()
            .map(|i| i.sku.as_str())
            .collect();
        assert_eq!(critical, ["SKU-005", "SKU-006"]);

        let summary = InventoryItem::summarize(&items);
        assert_eq!(summary.critical, 2);
        assert_eq!(summary.low_stock, 4);
        assert_eq!(summary.locations, 5);
    }

    #[test]
    fn total_value_uses_recorded_column() {
        let mut items = fixtures::sample();
        items[0].total_value = Money::from_units(1);
        let summary = InventoryItem::summarize(&items);
        assert_eq!(summary.total_value, Money::from_units(22_201));
    }
}
