use serde::Serialize;

use industrialerp_core::{DomainError, Summarize};
use industrialerp_inventory::{InventoryItem, InventorySummary, critical_items};

use super::{Listing, StatCard, count};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryView {
    pub summary: InventorySummary,
    /// Items classified critical across the whole inventory, not just the
    /// filtered rows.
    pub critical: Vec<InventoryItem>,
    pub listing: Listing<InventoryItem>,
}

impl InventoryView {
    pub fn build(
        items: &[InventoryItem],
        search: &str,
        filter: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            summary: InventoryItem::summarize(items),
            critical: critical_items(items).into_iter().cloned().collect(),
            listing: Listing::build(items, search, filter)?,
        })
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let s = &self.summary;
        vec![
            StatCard::new("Total Productos", count(s.total_products), "en inventario"),
            StatCard::new("Valor Total", s.total_value, "inventario"),
            StatCard::new("Stock Bajo", count(s.low_stock), "requieren atención"),
            StatCard::new("Ubicaciones", count(s.locations), "almacenes activos"),
        ]
    }
}
