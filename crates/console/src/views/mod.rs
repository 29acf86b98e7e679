//! Page view models.
//!
//! Each page is built from the record store by pure derivation: summaries
//! are recomputed from the full lists and tables are the filtered subset.
//! Nothing here formats for a terminal; see [`crate::render`].

pub mod dashboard;
pub mod inventory;
pub mod purchases;
pub mod reports;
pub mod sales;

use serde::Serialize;
use thiserror::Error;

use industrialerp_core::money::group_thousands;
use industrialerp_core::{CategoryFilter, CodedEnum, DomainError, RecordFilter, Searchable, Summarize};
use industrialerp_infra::RecordStore;
use industrialerp_inventory::InventoryItem;
use industrialerp_purchasing::PurchaseOrder;
use industrialerp_reports::DateRange;
use industrialerp_sales::SalesOrder;

use crate::navigation::{ModuleId, NavigationState};

pub use dashboard::DashboardView;
pub use inventory::InventoryView;
pub use purchases::PurchasesView;
pub use reports::ReportsView;
pub use sales::SalesView;

/// Message shown in place of a table when the filter leaves nothing visible.
pub const EMPTY_STATE: &str = "No se encontraron registros con los filtros actuales";

/// One summary tile above a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
}

impl StatCard {
    pub fn new(title: &'static str, value: impl ToString, caption: impl Into<String>) -> Self {
        Self {
            title,
            value: value.to_string(),
            caption: caption.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    pub module: ModuleId,
    pub label: &'static str,
    pub active: bool,
    /// Items needing attention; zero shows no badge.
    pub notifications: usize,
}

/// Badge count for a module, derived from its records.
pub fn notification_count<S: RecordStore + ?Sized>(store: &S, module: ModuleId) -> usize {
    match module {
        ModuleId::Dashboard | ModuleId::Reports => 0,
        ModuleId::Purchases => PurchaseOrder::summarize(store.list_purchase_orders()).pending,
        ModuleId::Sales => SalesOrder::summarize(store.list_sales_orders()).active_orders,
        ModuleId::Inventory => InventoryItem::summarize(store.list_inventory_items()).low_stock,
    }
}

pub fn sidebar<S: RecordStore + ?Sized>(store: &S, nav: &NavigationState) -> Vec<SidebarEntry> {
    ModuleId::ALL
        .iter()
        .map(|&module| SidebarEntry {
            module,
            label: module.label(),
            active: module == nav.active,
            notifications: notification_count(store, module),
        })
        .collect()
}

/// User input that shapes a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    /// Category code, or "all".
    pub filter: Option<String>,
    pub range: Option<DateRange>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error(transparent)]
    Filter(#[from] DomainError),

    #[error("the {module} page does not support {option}")]
    Unsupported {
        module: ModuleId,
        option: &'static str,
    },
}

impl ViewQuery {
    fn reject_table_options(&self, module: ModuleId) -> Result<(), ViewError> {
        if !self.search.is_empty() {
            return Err(ViewError::Unsupported { module, option: "--search" });
        }
        if self.filter.is_some() {
            return Err(ViewError::Unsupported { module, option: "--filter" });
        }
        Ok(())
    }

    fn reject_range(&self, module: ModuleId) -> Result<(), ViewError> {
        match self.range {
            Some(_) => Err(ViewError::Unsupported { module, option: "--range" }),
            None => Ok(()),
        }
    }
}

/// Filtered table of one module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize, T::Category: Serialize"))]
pub struct Listing<T: Searchable> {
    pub search: String,
    /// `None` when every category is shown.
    pub category: Option<T::Category>,
    pub rows: Vec<T>,
    /// Size of the unfiltered list.
    pub total_records: usize,
}

impl<T> Listing<T>
where
    T: Searchable + Clone,
    T::Category: CodedEnum,
{
    pub fn build(records: &[T], search: &str, filter: Option<&str>) -> Result<Self, DomainError> {
        let category: CategoryFilter<T::Category> = match filter {
            Some(code) => code.parse()?,
            None => CategoryFilter::All,
        };
        let predicate = RecordFilter::new()
            .with_query(search)
            .with_category(category);
        Ok(Self {
            search: search.to_string(),
            category: category.selected(),
            rows: predicate.apply(records).into_iter().cloned().collect(),
            total_records: records.len(),
        })
    }

    /// True when the filter hides every record.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "module", rename_all = "lowercase")]
pub enum ModuleView {
    Dashboard(DashboardView),
    Purchases(PurchasesView),
    Sales(SalesView),
    Inventory(InventoryView),
    Reports(ReportsView),
}

impl ModuleView {
    pub fn cards(&self) -> Vec<StatCard> {
        match self {
            ModuleView::Dashboard(v) => v.cards(),
            ModuleView::Purchases(v) => v.cards(),
            ModuleView::Sales(v) => v.cards(),
            ModuleView::Inventory(v) => v.cards(),
            ModuleView::Reports(v) => v.cards(),
        }
    }
}

/// Everything rendered for one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub navigation: NavigationState,
    pub sidebar: Vec<SidebarEntry>,
    pub view: ModuleView,
}

/// Build the page for the active module.
pub fn build_page<S: RecordStore + ?Sized>(
    store: &S,
    navigation: NavigationState,
    query: &ViewQuery,
) -> Result<Page, ViewError> {
    let module = navigation.active;
    let filter = query.filter.as_deref();

    let view = match module {
        ModuleId::Dashboard => {
            query.reject_table_options(module)?;
            query.reject_range(module)?;
            ModuleView::Dashboard(DashboardView::build(store))
        }
        ModuleId::Purchases => {
            query.reject_range(module)?;
            ModuleView::Purchases(PurchasesView::build(
                store.list_purchase_orders(),
                &query.search,
                filter,
            )?)
        }
        ModuleId::Sales => {
            query.reject_range(module)?;
            ModuleView::Sales(SalesView::build(
                store.list_sales_orders(),
                &store.reports().monthly,
                &query.search,
                filter,
            )?)
        }
        ModuleId::Inventory => {
            query.reject_range(module)?;
            ModuleView::Inventory(InventoryView::build(
                store.list_inventory_items(),
                &query.search,
                filter,
            )?)
        }
        ModuleId::Reports => {
            query.reject_table_options(module)?;
            ModuleView::Reports(ReportsView::build(
                store.reports(),
                store.list_sales_orders(),
                query.range.unwrap_or_default(),
            ))
        }
    };

    Ok(Page {
        navigation,
        sidebar: sidebar(store, &navigation),
        view,
    })
}

/// `1,234` style count.
pub(crate) fn count(n: usize) -> String {
    group_thousands(n as u64)
}

/// `+9.8%` / `-2.1%`, or `n/d` when undefined.
pub(crate) fn signed_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 0.0 => format!("+{v:.1}%"),
        Some(v) => format!("{v:.1}%"),
        None => "n/d".to_string(),
    }
}
