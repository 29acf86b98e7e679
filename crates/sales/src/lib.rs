//! Sales module.
//!
//! Sales order read models, status and payment badges, stat-card summary and
//! the "new sale" draft, implemented purely as deterministic domain logic (no IO).

pub mod draft;
pub mod order;
pub mod rep;
pub mod summary;

pub use draft::{PaymentTerms, SalesOrderDraft};
pub use order::{PaymentStatus, SalesOrder, SalesOrderId, SalesOrderStatus};
pub use rep::{SalesRep, find_rep};
pub use summary::SalesSummary;
