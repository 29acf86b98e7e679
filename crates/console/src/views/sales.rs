use serde::Serialize;

use industrialerp_core::{DomainError, Summarize};
use industrialerp_reports::{MonthlyFigures, month_over_month};
use industrialerp_sales::{SalesOrder, SalesSummary};

use super::{Listing, StatCard, count, signed_percent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesView {
    pub summary: SalesSummary,
    /// Latest month against the one before.
    pub growth_percent: Option<f64>,
    pub listing: Listing<SalesOrder>,
}

impl SalesView {
    pub fn build(
        orders: &[SalesOrder],
        monthly: &[MonthlyFigures],
        search: &str,
        filter: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            summary: SalesOrder::summarize(orders),
            growth_percent: month_over_month(monthly),
            listing: Listing::build(orders, search, filter)?,
        })
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let s = &self.summary;
        vec![
            StatCard::new("Total Ventas", s.total_sales, "este mes"),
            StatCard::new("Órdenes Activas", count(s.active_orders), "en proceso"),
            StatCard::new("Clientes", count(s.distinct_customers), "únicos"),
            StatCard::new("Crecimiento", signed_percent(self.growth_percent), "vs mes anterior"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use industrialerp_core::Money;
    use industrialerp_infra::{InMemoryRecordStore, RecordStore};
    use industrialerp_sales::SalesOrderStatus;

    #[test]
    fn sample_cards() {
        let store = InMemoryRecordStore::sample().unwrap();
        let view = SalesView::build(
            store.list_sales_orders(),
            &store.reports().monthly,
            "",
            Some("all"),
        )
        .unwrap();

        assert_eq!(view.summary.total_sales, Money::from_units(156_950));
        assert_eq!(view.listing.rows.len(), 4);
        assert_eq!(view.listing.category, None);

        let values: Vec<_> = view.cards().into_iter().map(|c| c.value).collect();
        assert_eq!(values, ["$156,950", "2", "4", "+9.8%"]);
    }

    #[test]
    fn status_filter_keeps_order() {
        let store = InMemoryRecordStore::sample().unwrap();
        let view = SalesView::build(store.list_sales_orders(), &[], "", Some("cancelled")).unwrap();
        assert_eq!(view.listing.category, Some(SalesOrderStatus::Cancelled));
        assert_eq!(view.listing.rows[0].id.as_str(), "VT-004");
        assert_eq!(view.growth_percent, None);
    }
}
