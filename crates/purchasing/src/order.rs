use chrono::NaiveDate;
use serde::Serialize;

use industrialerp_core::{
    Badge, BadgeTier, Entity, Labeled, Money, Searchable, coded_enum, record_id,
};

record_id!(
    /// Purchase order identifier (e.g. `PO-001`).
    PurchaseOrderId
);

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseOrderStatus {
    Pending,
    Approved,
    Delivered,
    Cancelled,
}

coded_enum!(PurchaseOrderStatus, "purchase status", {
    Pending => "pending",
    Approved => "approved",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

impl Labeled for PurchaseOrderStatus {
    fn badge(&self) -> Badge {
        match self {
            PurchaseOrderStatus::Pending => Badge::new("Pendiente", BadgeTier::Secondary),
            PurchaseOrderStatus::Approved => Badge::new("Aprobada", BadgeTier::Default),
            PurchaseOrderStatus::Delivered => Badge::new("Entregada", BadgeTier::Default),
            PurchaseOrderStatus::Cancelled => Badge::new("Cancelada", BadgeTier::Destructive),
        }
    }
}

impl PurchaseOrderStatus {
    /// Approved orders are on their way from the supplier.
    pub fn is_in_transit(self) -> bool {
        matches!(self, PurchaseOrderStatus::Approved)
    }

    /// Orders that still need attention (not delivered, not cancelled).
    pub fn is_open(self) -> bool {
        matches!(
            self,
            PurchaseOrderStatus::Pending | PurchaseOrderStatus::Approved
        )
    }
}

/// Read model: one purchase order as listed in the purchases table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub supplier: String,
    pub date: NaiveDate,
    pub amount: Money,
    pub status: PurchaseOrderStatus,
    pub item_count: u32,
    pub delivery_date: NaiveDate,
}

impl Entity for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Searchable for PurchaseOrder {
    type Category = PurchaseOrderStatus;

    fn search_keys(&self) -> [&str; 2] {
        [self.id.as_str(), self.supplier.as_str()]
    }

    fn category(&self) -> PurchaseOrderStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use industrialerp_core::{CategoryFilter, CodedEnum, DomainError, RecordFilter};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn order(id: &str, supplier: &str, status: PurchaseOrderStatus) -> PurchaseOrder {
        PurchaseOrder {
            id: PurchaseOrderId::parse(id).unwrap(),
            supplier: supplier.to_string(),
            date: date("2024-01-15"),
            amount: Money::from_units(1_000),
            status,
            item_count: 1,
            delivery_date: date("2024-01-25"),
        }
    }

    #[test]
    fn every_status_has_a_badge() {
        let tiers: Vec<_> = PurchaseOrderStatus::ALL.iter().map(|s| s.tier()).collect();
        assert_eq!(
            tiers,
            [
                BadgeTier::Secondary,
                BadgeTier::Default,
                BadgeTier::Default,
                BadgeTier::Destructive
            ]
        );
        assert_eq!(PurchaseOrderStatus::Cancelled.label(), "Cancelada");
    }

    #[test]
    fn unknown_status_code_is_rejected() {
        let err = "shipped".parse::<PurchaseOrderStatus>().unwrap_err();
        assert_eq!(err, DomainError::unknown_enum("purchase status", "shipped"));
    }

    #[test]
    fn search_matches_supplier_or_id() {
        let orders = vec![
            order("PO-001", "Aceros del Norte S.A.", PurchaseOrderStatus::Pending),
            order("PO-002", "Válvulas Industriales Ltda.", PurchaseOrderStatus::Approved),
        ];

        let by_supplier = RecordFilter::new().with_query("aceros").apply(&orders);
        assert_eq!(by_supplier.len(), 1);
        assert_eq!(by_supplier[0].id.as_str(), "PO-001");

        let by_id = RecordFilter::new()
            .with_query("po-00")
            .with_category(CategoryFilter::Only(PurchaseOrderStatus::Approved))
            .apply(&orders);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id.as_str(), "PO-002");
    }
}
