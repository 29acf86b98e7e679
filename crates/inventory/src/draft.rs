//! "New product" dialog input.

use serde::Serialize;

use industrialerp_core::{DomainError, DomainResult, Money};

use crate::item::{InventoryCategory, Sku};
use crate::stock::StockLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItemDraft {
    pub name: String,
    pub sku: Sku,
    pub category: InventoryCategory,
    pub location: String,
    pub description: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub unit_price: Money,
}

impl InventoryItemDraft {
    /// Value the new item would be booked at.
    pub fn total_value(&self) -> Money {
        self.unit_price.times(u64::from(self.current_stock))
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::new(self.current_stock, self.min_stock, self.max_stock)
    }

    /// Checks that need no reference data. SKU uniqueness and location
    /// membership are checked by the caller against the store.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if self.location.trim().is_empty() {
            return Err(DomainError::validation("location cannot be empty"));
        }
        if self.min_stock > self.max_stock {
            return Err(DomainError::invariant(format!(
                "minimum stock {} exceeds maximum stock {}",
                self.min_stock, self.max_stock
            )));
        }
        if self.unit_price.cents() < 0 {
            return Err(DomainError::validation("unit price cannot be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock::StockSeverity;

    fn draft() -> InventoryItemDraft {
        InventoryItemDraft {
            name: "Cable THHN 12 AWG".to_string(),
            sku: Sku::parse("SKU-010").unwrap(),
            category: InventoryCategory::Components,
            location: "Almacén B-1".to_string(),
            description: "Rollo de 100 m".to_string(),
            current_stock: 20,
            min_stock: 40,
            max_stock: 120,
            unit_price: Money::from_decimal(64.9).unwrap(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let d = draft();
        assert_eq!(d.validate(), Ok(()));
        assert_eq!(d.total_value(), Money::from_units(1_298));
        assert_eq!(d.stock_level().severity, StockSeverity::Critical);
    }

    #[test]
    fn min_above_max_is_rejected() {
        let mut d = draft();
        d.min_stock = 200;
        match d.validate() {
            Err(DomainError::InvariantViolation(msg)) => assert!(msg.contains("exceeds maximum")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn min_equal_to_max_is_allowed() {
        let mut d = draft();
        d.min_stock = 120;
        assert_eq!(d.validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut d = draft();
        d.name = String::new();
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }
}
