use chrono::NaiveDate;
use serde::Serialize;

use industrialerp_core::{Entity, Money, Searchable, coded_enum, record_id};

use crate::stock::{StockLevel, StockSeverity, classify, stock_ratio_percent};

record_id!(
    /// Stock-keeping unit, the unique identifier of an inventory item.
    Sku
);

/// Product category. The code is the category name as shown in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryCategory {
    RawMaterial,
    Components,
    Equipment,
    Instruments,
    Tools,
    SpareParts,
}

coded_enum!(InventoryCategory, "inventory category", {
    RawMaterial => "Materia Prima",
    Components => "Componentes",
    Equipment => "Equipos",
    Instruments => "Instrumentos",
    Tools => "Herramientas",
    SpareParts => "Repuestos",
});

/// Read model: one row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub sku: Sku,
    pub name: String,
    pub category: InventoryCategory,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub location: String,
    pub unit_price: Money,
    /// `current_stock × unit_price` as recorded in the source data. Not
    /// recomputed.
    pub total_value: Money,
    pub last_movement: NaiveDate,
    pub supplier: String,
}

impl InventoryItem {
    pub fn severity(&self) -> StockSeverity {
        classify(self.current_stock, self.min_stock)
    }

    pub fn ratio_percent(&self) -> Option<f64> {
        stock_ratio_percent(self.current_stock, self.min_stock)
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::new(self.current_stock, self.min_stock, self.max_stock)
    }

    /// `current_stock × unit_price`, for checking the recorded total.
    pub fn computed_value(&self) -> Money {
        self.unit_price.times(u64::from(self.current_stock))
    }

    /// Units needed to get back to the maximum.
    pub fn reorder_quantity(&self) -> u32 {
        self.max_stock.saturating_sub(self.current_stock)
    }
}

impl Entity for InventoryItem {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl Searchable for InventoryItem {
    type Category = InventoryCategory;

    fn search_keys(&self) -> [&str; 2] {
        [self.sku.as_str(), self.name.as_str()]
    }

    fn category(&self) -> InventoryCategory {
        self.category
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn item(
        sku: &str,
        name: &str,
        category: InventoryCategory,
        stock: (u32, u32, u32),
        location: &str,
        unit_price_cents: i64,
    ) -> InventoryItem {
        let unit_price = Money::from_cents(unit_price_cents);
        InventoryItem {
            sku: Sku::parse(sku).unwrap(),
            name: name.to_string(),
            category,
            current_stock: stock.0,
            min_stock: stock.1,
            max_stock: stock.2,
            location: location.to_string(),
            unit_price,
            total_value: unit_price.times(u64::from(stock.0)),
            last_movement: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            supplier: "Proveedor".to_string(),
        }
    }

    /// The four items of the sample catalogue.
    pub fn sample() -> Vec<InventoryItem> {
        vec![
            item("SKU-001", "Acero Inoxidable 304", InventoryCategory::RawMaterial, (150, 100, 300), "Almacén A-1", 8_550),
            item("SKU-002", "Válvulas Industriales 2\"", InventoryCategory::Components, (45, 50, 150), "Almacén B-2", 12_500),
            item("SKU-003", "Motores Eléctricos 5HP", InventoryCategory::Equipment, (22, 30, 80), "Almacén C-3", 45_000),
            item("SKU-004", "Sensores de Presión", InventoryCategory::Instruments, (89, 75, 200), "Almacén D-1", 7_500),
        ]
    }
}
