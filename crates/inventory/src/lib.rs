//! Inventory module.
//!
//! Inventory item read models, stock severity classification, the stat-card
//! summary and the "new product" draft, implemented purely as deterministic
//! domain logic (no IO).

pub mod draft;
pub mod item;
pub mod stock;
pub mod summary;

pub use draft::InventoryItemDraft;
pub use item::{InventoryCategory, InventoryItem, Sku};
pub use stock::{StockLevel, StockSeverity, classify, stock_ratio_percent};
pub use summary::{InventorySummary, critical_items};
