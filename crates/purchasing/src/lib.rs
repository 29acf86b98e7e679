//! Purchasing module.
//!
//! Purchase order read models, their status badges, stat-card summary and the
//! "new order" draft, implemented purely as deterministic domain logic (no IO).

pub mod draft;
pub mod order;
pub mod summary;

pub use draft::{Priority, PurchaseOrderDraft};
pub use order::{PurchaseOrder, PurchaseOrderId, PurchaseOrderStatus};
pub use summary::{PurchaseSummary, open_orders};
