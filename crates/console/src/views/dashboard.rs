//! Executive overview: headline cards, stock watch, recent activity and the
//! monthly trend.

use chrono::NaiveDate;
use serde::Serialize;

use industrialerp_core::aggregate::distinct_count;
use industrialerp_core::money::group_thousands;
use industrialerp_core::{Labeled, Money, Summarize};
use industrialerp_infra::RecordStore;
use industrialerp_inventory::{InventoryItem, Sku, StockLevel};
use industrialerp_purchasing::{PurchaseOrder, open_orders};
use industrialerp_reports::{CategoryShare, MonthlyFigures, month_over_month, trailing};
use industrialerp_sales::SalesOrder;

use super::{StatCard, count, signed_percent};

/// Months shown in the sales vs purchases chart.
pub const TREND_MONTHS: usize = 6;

/// Entries in the recent activity feed.
pub const RECENT_ACTIVITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Purchase,
    Sale,
}

/// One line of the recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub kind: ActivityKind,
    pub description: String,
    /// Supplier or customer.
    pub party: String,
    pub amount: Money,
}

impl ActivityEntry {
    fn purchase(order: &PurchaseOrder) -> Self {
        Self {
            date: order.date,
            kind: ActivityKind::Purchase,
            description: format!("Orden de compra {} ({})", order.id, order.status.label()),
            party: order.supplier.clone(),
            amount: order.amount,
        }
    }

    fn sale(order: &SalesOrder) -> Self {
        Self {
            date: order.date,
            kind: ActivityKind::Sale,
            description: format!("Venta {} ({})", order.id, order.status.label()),
            party: order.customer.clone(),
            amount: order.amount,
        }
    }
}

/// Latest purchase and sales records, newest first. On the same date
/// purchases come before sales, each in list order.
pub fn recent_activity(
    purchases: &[PurchaseOrder],
    sales: &[SalesOrder],
    limit: usize,
) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = purchases
        .iter()
        .map(ActivityEntry::purchase)
        .chain(sales.iter().map(ActivityEntry::sale))
        .collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);
    entries
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockWatchRow {
    pub sku: Sku,
    pub name: String,
    pub level: StockLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub latest_month: Option<MonthlyFigures>,
    pub sales_change_percent: Option<f64>,
    /// Active sales plus pending or approved purchases.
    pub open_orders: usize,
    pub units_in_stock: u64,
    pub active_customers: usize,
    pub stock_watch: Vec<StockWatchRow>,
    pub recent_activity: Vec<ActivityEntry>,
    pub trend: Vec<MonthlyFigures>,
    pub categories: Vec<CategoryShare>,
}

impl DashboardView {
    pub fn build<S: RecordStore + ?Sized>(store: &S) -> Self {
        let purchases = store.list_purchase_orders();
        let sales = store.list_sales_orders();
        let items = store.list_inventory_items();
        let reports = store.reports();

        Self {
            latest_month: reports.latest_month().cloned(),
            sales_change_percent: month_over_month(&reports.monthly),
            open_orders: SalesOrder::summarize(sales).active_orders
                + open_orders(purchases),
            units_in_stock: InventoryItem::summarize(items).units_in_stock,
            active_customers: distinct_count(sales, |o| o.customer.as_str()),
            stock_watch: items
                .iter()
                .map(|i| StockWatchRow {
                    sku: i.sku.clone(),
                    name: i.name.clone(),
                    level: i.stock_level(),
                })
                .collect(),
            recent_activity: recent_activity(purchases, sales, RECENT_ACTIVITY),
            trend: trailing(&reports.monthly, TREND_MONTHS).to_vec(),
            categories: reports.categories.clone(),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let month_sales = self
            .latest_month
            .as_ref()
            .map_or(Money::ZERO, |m| m.sales);
        vec![
            StatCard::new(
                "Ventas del Mes",
                month_sales,
                format!("{} vs mes anterior", signed_percent(self.sales_change_percent)),
            ),
            StatCard::new("Órdenes Activas", count(self.open_orders), "en proceso"),
            StatCard::new(
                "Productos en Stock",
                group_thousands(self.units_in_stock),
                "items disponibles",
            ),
            StatCard::new("Clientes Activos", count(self.active_customers), "este mes"),
        ]
    }
}
