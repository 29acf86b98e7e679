//! Purchases stat cards.

use serde::Serialize;

use industrialerp_core::aggregate::{count_where, sum_money};
use industrialerp_core::{Money, Summarize};

use crate::order::{PurchaseOrder, PurchaseOrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub total_orders: usize,
    /// Awaiting approval.
    pub pending: usize,
    /// Approved and on the way.
    pub in_transit: usize,
    pub total_amount: Money,
}

impl Summarize for PurchaseOrder {
    type Summary = PurchaseSummary;

    fn summarize(records: &[Self]) -> PurchaseSummary {
        PurchaseSummary {
            total_orders: records.len(),
            pending: count_where(records, |o| o.status == PurchaseOrderStatus::Pending),
            in_transit: count_where(records, |o| o.status.is_in_transit()),
            total_amount: sum_money(records, |o| o.amount),
        }
    }
}

/// Orders that still need attention, for the sidebar badge.
pub fn open_orders(records: &[PurchaseOrder]) -> usize {
    count_where(records, |o| o.status.is_open())
}
