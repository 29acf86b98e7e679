use chrono::NaiveDate;
use serde::Serialize;

use industrialerp_core::{
    Badge, BadgeTier, Entity, Labeled, Money, Searchable, coded_enum, record_id,
};

record_id!(
    /// Sales order identifier (e.g. `VT-001`).
    SalesOrderId
);

/// Sales order fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesOrderStatus {
    Pending,
    Completed,
    Shipped,
    Cancelled,
}

coded_enum!(SalesOrderStatus, "sales status", {
    Pending => "pending",
    Completed => "completed",
    Shipped => "shipped",
    Cancelled => "cancelled",
});

impl Labeled for SalesOrderStatus {
    fn badge(&self) -> Badge {
        match self {
            SalesOrderStatus::Pending => Badge::new("Pendiente", BadgeTier::Secondary),
            SalesOrderStatus::Completed => Badge::new("Completada", BadgeTier::Default),
            SalesOrderStatus::Shipped => Badge::new("Enviada", BadgeTier::Default),
            SalesOrderStatus::Cancelled => Badge::new("Cancelada", BadgeTier::Destructive),
        }
    }
}

impl SalesOrderStatus {
    /// Still in process: neither completed nor cancelled.
    pub fn is_active(self) -> bool {
        !matches!(
            self,
            SalesOrderStatus::Completed | SalesOrderStatus::Cancelled
        )
    }
}

/// Collection status of the order's invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Partial,
    Overdue,
    Refunded,
}

coded_enum!(PaymentStatus, "payment status", {
    Paid => "paid",
    Pending => "pending",
    Partial => "partial",
    Overdue => "overdue",
    Refunded => "refunded",
});

impl Labeled for PaymentStatus {
    fn badge(&self) -> Badge {
        match self {
            PaymentStatus::Paid => Badge::new("Pagado", BadgeTier::Default),
            PaymentStatus::Pending => Badge::new("Pendiente", BadgeTier::Secondary),
            PaymentStatus::Partial => Badge::new("Parcial", BadgeTier::Secondary),
            PaymentStatus::Overdue => Badge::new("Vencido", BadgeTier::Destructive),
            PaymentStatus::Refunded => Badge::new("Reembolsado", BadgeTier::Outline),
        }
    }
}

/// Read model: one sales order as listed in the sales table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesOrder {
    pub id: SalesOrderId,
    pub customer: String,
    pub date: NaiveDate,
    pub amount: Money,
    pub status: SalesOrderStatus,
    pub item_count: u32,
    pub payment_status: PaymentStatus,
    pub due_date: NaiveDate,
}

impl Entity for SalesOrder {
    type Id = SalesOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Searchable for SalesOrder {
    type Category = SalesOrderStatus;

    fn search_keys(&self) -> [&str; 2] {
        [self.id.as_str(), self.customer.as_str()]
    }

    fn category(&self) -> SalesOrderStatus {
        self.status
    }
}
