//! Create-command pipeline for the "new record" dialogs.
//!
//! ```text
//! CreateCommand
//!   ↓
//! 1. Validate the draft on its own (dates, quantities, amounts)
//!   ↓
//! 2. Check references against the store (directories, SKU uniqueness)
//!   ↓
//! 3. Acknowledge with a receipt
//! ```
//!
//! Records are not persisted: the store is read-only and is never modified by
//! a dispatch. A receipt only confirms that the draft would have been
//! accepted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use industrialerp_core::{DomainError, Labeled};
use industrialerp_inventory::InventoryItemDraft;
use industrialerp_purchasing::PurchaseOrderDraft;
use industrialerp_sales::{SalesOrderDraft, find_rep};

use crate::read_model::RecordStore;

/// One "create" action from a module page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateCommand {
    PurchaseOrder(PurchaseOrderDraft),
    SalesOrder(SalesOrderDraft),
    InventoryItem(InventoryItemDraft),
}

impl CreateCommand {
    /// Stable command type, e.g. `purchasing.order.create`.
    pub fn kind(&self) -> &'static str {
        match self {
            CreateCommand::PurchaseOrder(_) => "purchasing.order.create",
            CreateCommand::SalesOrder(_) => "sales.order.create",
            CreateCommand::InventoryItem(_) => "inventory.item.create",
        }
    }

    /// Notification shown when the command is accepted.
    pub fn success_message(&self) -> &'static str {
        match self {
            CreateCommand::PurchaseOrder(_) => "Orden de compra creada exitosamente",
            CreateCommand::SalesOrder(_) => "Orden de venta creada exitosamente",
            CreateCommand::InventoryItem(_) => "Producto agregado al inventario exitosamente",
        }
    }
}

/// Acknowledgement of an accepted command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReceipt {
    pub id: Uuid,
    pub kind: &'static str,
    pub message: &'static str,
    /// Derived figures worth echoing back (line total, due date, ...).
    pub details: Vec<(&'static str, String)>,
    pub accepted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The draft failed validation.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The draft names something the store does not know.
    #[error("unknown {kind}: {value:?}")]
    UnknownReference { kind: &'static str, value: String },
    /// The draft collides with an existing record.
    #[error("conflict: {0}")]
    Conflict(String),
    /// The draft contradicts itself (min stock above max).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl From<DomainError> for DispatchError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => DispatchError::Validation(msg),
            DomainError::InvariantViolation(msg) => DispatchError::InvariantViolation(msg),
            DomainError::InvalidId(msg) => DispatchError::Validation(msg),
            DomainError::UnknownEnumValue { .. } => DispatchError::Validation(value.to_string()),
            DomainError::Conflict(msg) => DispatchError::Conflict(msg),
        }
    }
}

/// Validates create commands against a [`RecordStore`].
#[derive(Debug)]
pub struct CommandDispatcher<S> {
    store: S,
    today: NaiveDate,
}

impl<S> CommandDispatcher<S> {
    /// `today` is the date delivery dates are checked against.
    pub fn new(store: S, today: NaiveDate) -> Self {
        Self { store, today }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: RecordStore> CommandDispatcher<S> {
    pub fn dispatch(&self, command: &CreateCommand) -> Result<CommandReceipt, DispatchError> {
        let kind = command.kind();
        let outcome = match command {
            CreateCommand::PurchaseOrder(draft) => self.check_purchase(draft),
            CreateCommand::SalesOrder(draft) => self.check_sale(draft),
            CreateCommand::InventoryItem(draft) => self.check_item(draft),
        };

        match outcome {
            Ok(details) => {
                let receipt = CommandReceipt {
                    id: Uuid::now_v7(),
                    kind,
                    message: command.success_message(),
                    details,
                    accepted_at: Utc::now(),
                };
                info!(kind, receipt_id = %receipt.id, "command accepted");
                Ok(receipt)
            }
            Err(err) => {
                warn!(kind, error = %err, "command rejected");
                Err(err)
            }
        }
    }

    fn check_purchase(
        &self,
        draft: &PurchaseOrderDraft,
    ) -> Result<Vec<(&'static str, String)>, DispatchError> {
        draft.validate(self.today)?;
        require_listed("supplier", self.store.suppliers(), &draft.supplier)?;
        Ok(vec![
            ("supplier", draft.supplier.clone()),
            ("priority", draft.priority.label().to_string()),
            ("estimated_budget", draft.estimated_budget.to_string()),
            ("delivery_date", draft.delivery_date.to_string()),
        ])
    }

    fn check_sale(
        &self,
        draft: &SalesOrderDraft,
    ) -> Result<Vec<(&'static str, String)>, DispatchError> {
        draft.validate(self.today)?;
        require_listed("customer", self.store.customers(), &draft.customer)?;

        let mut details = vec![
            ("customer", draft.customer.clone()),
            ("line_total", draft.line_total().to_string()),
            ("payment_terms", draft.payment_terms.label().to_string()),
        ];
        if let Some(due) = draft.due_date() {
            details.push(("due_date", due.to_string()));
        }
        if let Some(rep) = &draft.sales_rep {
            let found = find_rep(self.store.sales_reps(), rep).ok_or_else(|| {
                DispatchError::UnknownReference {
                    kind: "sales rep",
                    value: rep.clone(),
                }
            })?;
            details.push(("sales_rep", found.name.clone()));
        }
        Ok(details)
    }

    fn check_item(
        &self,
        draft: &InventoryItemDraft,
    ) -> Result<Vec<(&'static str, String)>, DispatchError> {
        draft.validate()?;
        if self.store.find_inventory_item(&draft.sku).is_some() {
            return Err(DispatchError::Conflict(format!(
                "SKU {} is already in use",
                draft.sku
            )));
        }
        require_listed("location", self.store.locations(), &draft.location)?;
        let level = draft.stock_level();
        let mut details = vec![
            ("sku", draft.sku.to_string()),
            ("total_value", draft.total_value().to_string()),
            ("initial_severity", level.severity.to_string()),
        ];
        if let Some(fill) = level.fill_percent() {
            details.push(("fill_level", format!("{fill:.0}%")));
        }
        Ok(details)
    }
}

fn require_listed(
    kind: &'static str,
    directory: &[String],
    value: &str,
) -> Result<(), DispatchError> {
    if directory.iter().any(|entry| entry == value) {
        Ok(())
    } else {
        Err(DispatchError::UnknownReference {
            kind,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use industrialerp_core::Money;
    use industrialerp_inventory::{InventoryCategory, Sku};
    use industrialerp_purchasing::Priority;
    use industrialerp_sales::PaymentTerms;

    use crate::read_model::InMemoryRecordStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dispatcher() -> CommandDispatcher<InMemoryRecordStore> {
        CommandDispatcher::new(InMemoryRecordStore::sample().unwrap(), date(2024, 1, 16))
    }

    fn purchase() -> PurchaseOrderDraft {
        PurchaseOrderDraft {
            supplier: "Tornillería Especializada".to_string(),
            delivery_date: date(2024, 1, 30),
            description: "Pernos M12".to_string(),
            priority: Priority::Urgent,
            estimated_budget: Money::from_units(3_200),
        }
    }

    fn sale() -> SalesOrderDraft {
        SalesOrderDraft {
            customer: "Metalúrgica del Sur".to_string(),
            delivery_date: date(2024, 1, 31),
            description: "Motores 5HP".to_string(),
            quantity: 4,
            unit_price: Money::from_units(450),
            discount_percent: 10,
            payment_terms: PaymentTerms::Net30,
            sales_rep: Some("maria".to_string()),
        }
    }

    fn item(sku: &str) -> InventoryItemDraft {
        InventoryItemDraft {
            name: "Cable THHN 12 AWG".to_string(),
            sku: Sku::parse(sku).unwrap(),
            category: InventoryCategory::Components,
            location: "Almacén B-1".to_string(),
            description: String::new(),
            current_stock: 20,
            min_stock: 40,
            max_stock: 120,
            unit_price: Money::from_units(65),
        }
    }

    #[test]
    fn purchase_is_acknowledged() {
        let d = dispatcher();
        let receipt = d.dispatch(&CreateCommand::PurchaseOrder(purchase())).unwrap();
        assert_eq!(receipt.kind, "purchasing.order.create");
        assert_eq!(receipt.message, "Orden de compra creada exitosamente");
        assert!(receipt.details.contains(&("priority", "Urgente".to_string())));
    }

    #[test]
    fn unknown_supplier_is_rejected() {
        let mut draft = purchase();
        draft.supplier = "Proveedor Fantasma".to_string();
        let err = dispatcher()
            .dispatch(&CreateCommand::PurchaseOrder(draft))
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownReference {
                kind: "supplier",
                value: "Proveedor Fantasma".to_string()
            }
        );
    }

    #[test]
    fn sale_receipt_echoes_total_due_date_and_rep() {
        let receipt = dispatcher()
            .dispatch(&CreateCommand::SalesOrder(sale()))
            .unwrap();
        assert_eq!(receipt.message, "Orden de venta creada exitosamente");
        assert!(receipt.details.contains(&("line_total", "$1,620".to_string())));
        assert!(receipt.details.contains(&("due_date", "2024-03-01".to_string())));
        assert!(receipt.details.contains(&("sales_rep", "María González".to_string())));
        assert!(receipt.details.contains(&("payment_terms", "Neto 30 días".to_string())));
    }

    #[test]
    fn unknown_sales_rep_is_rejected() {
        let mut draft = sale();
        draft.sales_rep = Some("pedro".to_string());
        let err = dispatcher().dispatch(&CreateCommand::SalesOrder(draft)).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownReference { kind: "sales rep", .. }));
    }

    #[test]
    fn past_delivery_maps_to_validation_error() {
        let mut draft = sale();
        draft.delivery_date = date(2024, 1, 1);
        let err = dispatcher().dispatch(&CreateCommand::SalesOrder(draft)).unwrap_err();
        assert!(matches!(err, DispatchError::Validation(_)));
    }

    #[test]
    fn new_item_is_acknowledged_without_touching_the_store() {
        let d = dispatcher();
        let receipt = d
            .dispatch(&CreateCommand::InventoryItem(item("SKU-010")))
            .unwrap();
        assert_eq!(receipt.message, "Producto agregado al inventario exitosamente");
        assert!(receipt.details.contains(&("initial_severity", "critical".to_string())));
        // 20 of a 120 maximum
        assert!(receipt.details.contains(&("fill_level", "17%".to_string())));
        assert_eq!(d.store().list_inventory_items().len(), 4);
    }

    #[test]
    fn used_sku_is_a_conflict() {
        let err = dispatcher()
            .dispatch(&CreateCommand::InventoryItem(item("SKU-002")))
            .unwrap_err();
        assert!(matches!(err, DispatchError::Conflict(msg) if msg.contains("SKU-002")));
    }

    #[test]
    fn unknown_location_is_rejected() {
        let mut draft = item("SKU-011");
        draft.location = "Almacén Z-9".to_string();
        let err = dispatcher().dispatch(&CreateCommand::InventoryItem(draft)).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownReference { kind: "location", .. }));
    }

    #[test]
    fn inverted_stock_bounds_are_an_invariant_violation() {
        let mut draft = item("SKU-012");
        draft.min_stock = 150;
        let err = dispatcher().dispatch(&CreateCommand::InventoryItem(draft)).unwrap_err();
        assert!(matches!(err, DispatchError::InvariantViolation(_)));
    }

    #[test]
    fn receipts_get_distinct_ids() {
        let d = dispatcher();
        let command = CreateCommand::PurchaseOrder(purchase());
        let a = d.dispatch(&command).unwrap();
        let b = d.dispatch(&command).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.get_version_num(), 7);
    }

    #[test]
    fn domain_errors_map_onto_dispatch_errors() {
        assert_eq!(
            DispatchError::from(DomainError::unknown_enum("priority", "asap")),
            DispatchError::Validation("unknown priority value: \"asap\"".to_string())
        );
        assert_eq!(
            DispatchError::from(DomainError::conflict("dup")),
            DispatchError::Conflict("dup".to_string())
        );
    }
}
