//! Reports module.
//!
//! Static reporting figures (monthly trend, category split, top customers and
//! products, report catalogue) and the financial indicators derived from them
//! for a selected date range.

pub mod catalog;
pub mod figures;
pub mod kpi;
pub mod range;

use serde::Serialize;

pub use catalog::{ReportEntry, ReportStatus, ready_count};
pub use figures::{CategoryShare, MonthlyFigures, TopCustomer, TopProduct, trailing};
pub use kpi::{FinancialKpis, month_over_month};
pub use range::DateRange;

/// Everything the reports page shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportsDataset {
    /// Oldest month first.
    pub monthly: Vec<MonthlyFigures>,
    pub categories: Vec<CategoryShare>,
    pub top_customers: Vec<TopCustomer>,
    pub top_products: Vec<TopProduct>,
    pub catalog: Vec<ReportEntry>,
}

impl ReportsDataset {
    pub fn kpis(&self, range: DateRange) -> FinancialKpis {
        FinancialKpis::derive(&self.monthly, range)
    }

    pub fn latest_month(&self) -> Option<&MonthlyFigures> {
        self.monthly.last()
    }

    /// Sum of category percentages; 100 for a consistent split.
    pub fn category_percent_total(&self) -> u32 {
        self.categories.iter().map(|c| u32::from(c.percent)).sum()
    }
}
