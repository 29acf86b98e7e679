use industrialerp_core::coded_enum;

/// Reporting period selector.
///
/// Figures are kept per month, so the two short ranges both resolve to the
/// latest month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateRange {
    Last7Days,
    Last30Days,
    Last3Months,
    #[default]
    Last6Months,
    LastYear,
}

coded_enum!(DateRange, "date range", {
    Last7Days => "last7days",
    Last30Days => "last30days",
    Last3Months => "last3months",
    Last6Months => "last6months",
    LastYear => "lastyear",
});

impl DateRange {
    /// Trailing months covered.
    pub fn months(self) -> usize {
        match self {
            DateRange::Last7Days | DateRange::Last30Days => 1,
            DateRange::Last3Months => 3,
            DateRange::Last6Months => 6,
            DateRange::LastYear => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7Days => "Últimos 7 días",
            DateRange::Last30Days => "Últimos 30 días",
            DateRange::Last3Months => "Últimos 3 meses",
            DateRange::Last6Months => "Últimos 6 meses",
            DateRange::LastYear => "Último año",
        }
    }
}
