//! Display badges: a label plus a visual tier.

use serde::Serialize;

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Default,
    Secondary,
    Destructive,
    Outline,
}

/// Label shown for a coded value, with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tier: BadgeTier,
}

impl Badge {
    pub const fn new(label: &'static str, tier: BadgeTier) -> Self {
        Self { label, tier }
    }
}

/// Values that render as a badge.
pub trait Labeled {
    fn badge(&self) -> Badge;

    fn label(&self) -> &'static str {
        self.badge().label
    }

    fn tier(&self) -> BadgeTier {
        self.badge().tier
    }
}
