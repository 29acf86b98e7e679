//! Stock severity classification.
//!
//! With `ratio = current / min × 100`:
//!
//! | ratio          | severity |
//! |----------------|----------|
//! | ≤ 50           | critical |
//! | (50, 100]      | low      |
//! | > 100          | good     |
//!
//! The comparison is done on integers (`2·current ≤ min`, `current ≤ min`) so
//! boundaries are exact. A minimum of zero means no reorder threshold is
//! defined: the item is `good` and has no ratio.

use serde::Serialize;

use industrialerp_core::{Badge, BadgeTier, Labeled, coded_enum};

/// Restock urgency of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StockSeverity {
    Critical,
    Low,
    Good,
}

coded_enum!(StockSeverity, "stock severity", {
    Critical => "critical",
    Low => "low",
    Good => "good",
});

impl Labeled for StockSeverity {
    fn badge(&self) -> Badge {
        match self {
            StockSeverity::Critical => Badge::new("Crítico", BadgeTier::Destructive),
            StockSeverity::Low => Badge::new("Bajo", BadgeTier::Secondary),
            StockSeverity::Good => Badge::new("Normal", BadgeTier::Default),
        }
    }
}

impl StockSeverity {
    /// Below or at the minimum.
    pub fn needs_restock(self) -> bool {
        !matches!(self, StockSeverity::Good)
    }
}

/// Classify `current` against `min`.
pub fn classify(current: u32, min: u32) -> StockSeverity {
    if min == 0 {
        return StockSeverity::Good;
    }
    let current = u64::from(current);
    let min = u64::from(min);
    if current * 2 <= min {
        StockSeverity::Critical
    } else if current <= min {
        StockSeverity::Low
    } else {
        StockSeverity::Good
    }
}

/// `current / min × 100`, or `None` when no minimum is defined.
pub fn stock_ratio_percent(current: u32, min: u32) -> Option<f64> {
    if min == 0 {
        return None;
    }
    Some(f64::from(current) / f64::from(min) * 100.0)
}

/// Stock level with its classification, as shown in the stock column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockLevel {
    pub current: u32,
    pub min: u32,
    pub max: u32,
    pub severity: StockSeverity,
    pub ratio_percent: Option<f64>,
}

impl StockLevel {
    pub fn new(current: u32, min: u32, max: u32) -> Self {
        Self {
            current,
            min,
            max,
            severity: classify(current, min),
            ratio_percent: stock_ratio_percent(current, min),
        }
    }

    /// Fill level against the maximum, clamped to 0..=100.
    pub fn fill_percent(&self) -> Option<f64> {
        if self.max == 0 {
            return None;
        }
        Some((f64::from(self.current) / f64::from(self.max) * 100.0).min(100.0))
    }
}
