//! Static reporting figures: monthly trend, category split and rankings.

use serde::Serialize;

use industrialerp_core::Money;

/// One month of the business trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyFigures {
    /// Short month label, e.g. "Ene".
    pub month: String,
    pub sales: Money,
    pub purchases: Money,
    pub profit: Money,
    /// Inventory value at month end.
    pub inventory: Money,
}

/// Revenue split by product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    /// Whole percent of revenue.
    pub percent: u8,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCustomer {
    pub name: String,
    pub sales: Money,
    /// Year-over-year growth in percent; negative when sales shrank.
    pub growth_percent: f64,
}

impl TopCustomer {
    pub fn is_growing(&self) -> bool {
        self.growth_percent >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub name: String,
    pub units_sold: u32,
    pub revenue: Money,
}

impl TopProduct {
    /// Revenue per unit sold, `None` when nothing was sold.
    pub fn average_price(&self) -> Option<Money> {
        if self.units_sold == 0 {
            return None;
        }
        let units = i64::from(self.units_sold);
        Some(Money::from_cents(
            (self.revenue.cents() + units / 2).div_euclid(units),
        ))
    }
}

/// The last `months` entries of a chronological series, or all of them when
/// the series is shorter.
pub fn trailing(monthly: &[MonthlyFigures], months: usize) -> &[MonthlyFigures] {
    let start = monthly.len().saturating_sub(months);
    &monthly[start..]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_window_clamps_to_series_length() {
        let monthly = fixtures::monthly();
        let last3: Vec<_> = trailing(&monthly, 3).iter().map(|m| m.month.as_str()).collect();
        assert_eq!(last3, ["Nov", "Dic", "Ene"]);
        assert_eq!(trailing(&monthly, 12).len(), 7);
        assert!(trailing(&[], 6).is_empty());
    }

    #[test]
    fn average_price_per_product() {
        let steel = TopProduct {
            name: "Acero Inoxidable 304".to_string(),
            units_sold: 450,
            revenue: Money::from_units(38_250),
        };
        assert_eq!(steel.average_price(), Some(Money::from_decimal(85.0).unwrap()));

        let unsold = TopProduct { units_sold: 0, ..steel };
        assert_eq!(unsold.average_price(), None);
    }

    #[test]
    fn shrinking_customer_is_not_growing() {
        let customer = TopCustomer {
            name: "Constructora Central S.A.".to_string(),
            sales: Money::from_units(128_000),
            growth_percent: -2.1,
        };
        assert!(!customer.is_growing());
    }
}
