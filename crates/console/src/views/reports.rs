use serde::Serialize;

use industrialerp_core::aggregate::distinct_count;
use industrialerp_reports::{
    CategoryShare, DateRange, FinancialKpis, MonthlyFigures, ReportEntry, ReportsDataset,
    TopCustomer, TopProduct, ready_count, trailing,
};
use industrialerp_sales::SalesOrder;

use super::{StatCard, count};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportsView {
    pub range: DateRange,
    pub kpis: FinancialKpis,
    pub active_customers: usize,
    /// Months inside the selected range.
    pub trend: Vec<MonthlyFigures>,
    pub categories: Vec<CategoryShare>,
    pub top_customers: Vec<TopCustomer>,
    pub top_products: Vec<TopProduct>,
    pub catalog: Vec<ReportEntry>,
    pub ready_reports: usize,
}

impl ReportsView {
    pub fn build(reports: &ReportsDataset, sales: &[SalesOrder], range: DateRange) -> Self {
        Self {
            range,
            kpis: reports.kpis(range),
            active_customers: distinct_count(sales, |o| o.customer.as_str()),
            trend: trailing(&reports.monthly, range.months()).to_vec(),
            categories: reports.categories.clone(),
            top_customers: reports.top_customers.clone(),
            top_products: reports.top_products.clone(),
            catalog: reports.catalog.clone(),
            ready_reports: ready_count(&reports.catalog),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let k = &self.kpis;
        let margin = k
            .profit_margin_percent
            .map_or_else(|| "n/d".to_string(), |m| format!("{m:.1}%"));
        let turnover = k
            .inventory_turnover
            .map_or_else(|| "n/d".to_string(), |t| format!("{t:.1}x"));
        vec![
            StatCard::new("Ingresos Totales", k.revenue, self.range.label().to_lowercase()),
            StatCard::new("Margen de Ganancia", margin, "promedio del período"),
            StatCard::new("Rotación Inventario", turnover, "veces por año"),
            StatCard::new("Clientes Activos", count(self.active_customers), "con órdenes de venta"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use industrialerp_infra::{InMemoryRecordStore, RecordStore};

    #[test]
    fn six_months_by_default() {
        let store = InMemoryRecordStore::sample().unwrap();
        let view = ReportsView::build(store.reports(), store.list_sales_orders(), DateRange::default());

        assert_eq!(view.trend.len(), 6);
        assert_eq!(view.ready_reports, 3);
        let values: Vec<_> = view.cards().into_iter().map(|c| c.value).collect();
        assert_eq!(values, ["$328,000", "34.5%", "2.2x", "4"]);
        assert_eq!(view.cards()[0].caption, "últimos 6 meses");
    }

    #[test]
    fn short_range_covers_latest_month() {
        let store = InMemoryRecordStore::sample().unwrap();
        let view = ReportsView::build(store.reports(), store.list_sales_orders(), DateRange::Last30Days);
        assert_eq!(view.trend.len(), 1);
        assert_eq!(view.trend[0].month, "Ene");
        assert_eq!(view.cards()[0].value, "$67,000");
    }
}
