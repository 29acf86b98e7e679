//! "New purchase order" dialog input.

use chrono::NaiveDate;
use serde::Serialize;

use industrialerp_core::{Badge, BadgeTier, DomainError, DomainResult, Labeled, Money, coded_enum};

/// Urgency requested for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

coded_enum!(Priority, "priority", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

impl Labeled for Priority {
    fn badge(&self) -> Badge {
        match self {
            Priority::Low => Badge::new("Baja", BadgeTier::Outline),
            Priority::Medium => Badge::new("Media", BadgeTier::Secondary),
            Priority::High => Badge::new("Alta", BadgeTier::Default),
            Priority::Urgent => Badge::new("Urgente", BadgeTier::Destructive),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderDraft {
    pub supplier: String,
    pub delivery_date: NaiveDate,
    pub description: String,
    pub priority: Priority,
    pub estimated_budget: Money,
}

impl PurchaseOrderDraft {
    /// Checks that need no reference data. Supplier membership is checked by
    /// the caller against its supplier directory.
    pub fn validate(&self, today: NaiveDate) -> DomainResult<()> {
        if self.supplier.trim().is_empty() {
            return Err(DomainError::validation("supplier cannot be empty"));
        }
        if self.delivery_date < today {
            return Err(DomainError::validation(format!(
                "delivery date {} is before today ({today})",
                self.delivery_date
            )));
        }
        if self.estimated_budget.cents() < 0 {
            return Err(DomainError::validation("estimated budget cannot be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
    }

    fn draft() -> PurchaseOrderDraft {
        PurchaseOrderDraft {
            supplier: "Aceros del Norte S.A.".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
            description: "Lámina 304".to_string(),
            priority: Priority::High,
            estimated_budget: Money::from_units(12_000),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(draft().validate(today()), Ok(()));
    }

    #[test]
    fn delivery_in_the_past_is_rejected() {
        let mut d = draft();
        d.delivery_date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(matches!(d.validate(today()), Err(DomainError::Validation(_))));
    }

    #[test]
    fn blank_supplier_is_rejected() {
        let mut d = draft();
        d.supplier = "   ".to_string();
        assert!(matches!(d.validate(today()), Err(DomainError::Validation(_))));
    }

    #[test]
    fn priority_labels() {
        assert_eq!("urgent".parse::<Priority>().unwrap().label(), "Urgente");
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
