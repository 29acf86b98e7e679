//! Financial indicators derived from the monthly series.

use serde::Serialize;

use industrialerp_core::Money;

use crate::figures::{MonthlyFigures, trailing};
use crate::range::DateRange;

/// Headline indicators for one reporting range.
///
/// Percentages are `None` where their denominator is zero, and the
/// month-over-month change needs at least two months of history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialKpis {
    pub range: DateRange,
    /// Months actually available in the window.
    pub months: usize,
    pub revenue: Money,
    pub purchases: Money,
    pub profit: Money,
    pub profit_margin_percent: Option<f64>,
    /// Latest month's sales against the month before, over the whole series.
    pub revenue_change_percent: Option<f64>,
    pub average_inventory: Money,
    /// Purchases over average inventory, annualised.
    pub inventory_turnover: Option<f64>,
}

impl FinancialKpis {
    /// Derive the indicators for `range` from a chronological series.
    pub fn derive(monthly: &[MonthlyFigures], range: DateRange) -> Self {
        let window = trailing(monthly, range.months());
        let months = window.len();

        let revenue: Money = window.iter().map(|m| m.sales).sum();
        let purchases: Money = window.iter().map(|m| m.purchases).sum();
        let profit: Money = window.iter().map(|m| m.profit).sum();
        let inventory_total: Money = window.iter().map(|m| m.inventory).sum();

        let average_inventory = if months == 0 {
            Money::ZERO
        } else {
            let n = i64::try_from(months).unwrap_or(i64::MAX);
            Money::from_cents((inventory_total.cents() + n / 2).div_euclid(n))
        };

        let inventory_turnover = if average_inventory.is_zero() {
            None
        } else {
            let annualise = 12.0 / months as f64;
            Some(purchases.as_f64() / average_inventory.as_f64() * annualise)
        };

        Self {
            range,
            months,
            revenue,
            purchases,
            profit,
            profit_margin_percent: percent_of(profit, revenue),
            revenue_change_percent: month_over_month(monthly),
            average_inventory,
            inventory_turnover,
        }
    }
}

fn percent_of(part: Money, whole: Money) -> Option<f64> {
    if whole.is_zero() {
        return None;
    }
    Some(part.as_f64() / whole.as_f64() * 100.0)
}

/// Latest month's sales against the month before, in percent.
pub fn month_over_month(monthly: &[MonthlyFigures]) -> Option<f64> {
    match monthly {
        [.., previous, latest] => percent_of(latest.sales - previous.sales, previous.sales),
        _ => None,
    }
}
