//! Sales stat cards.

use serde::Serialize;

use industrialerp_core::aggregate::{count_where, distinct_count, sum_money};
use industrialerp_core::{Money, Summarize};

use crate::order::SalesOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub order_count: usize,
    pub total_sales: Money,
    /// Neither completed nor cancelled.
    pub active_orders: usize,
    pub distinct_customers: usize,
}

impl Summarize for SalesOrder {
    type Summary = SalesSummary;

    fn summarize(records: &[Self]) -> SalesSummary {
        SalesSummary {
            order_count: records.len(),
            total_sales: sum_money(records, |o| o.amount),
            active_orders: count_where(records, |o| o.status.is_active()),
            distinct_customers: distinct_count(records, |o| o.customer.as_str()),
        }
    }
}
