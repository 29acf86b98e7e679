//! "New sale" dialog input.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use industrialerp_core::{DomainError, DomainResult, Money, coded_enum};

/// Credit terms offered to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentTerms {
    Immediate,
    Net15,
    #[default]
    Net30,
    Net60,
}

coded_enum!(PaymentTerms, "payment terms", {
    Immediate => "immediate",
    Net15 => "net15",
    Net30 => "net30",
    Net60 => "net60",
});

impl PaymentTerms {
    pub fn label(self) -> &'static str {
        match self {
            PaymentTerms::Immediate => "Inmediato",
            PaymentTerms::Net15 => "Neto 15 días",
            PaymentTerms::Net30 => "Neto 30 días",
            PaymentTerms::Net60 => "Neto 60 días",
        }
    }

    pub fn days(self) -> u64 {
        match self {
            PaymentTerms::Immediate => 0,
            PaymentTerms::Net15 => 15,
            PaymentTerms::Net30 => 30,
            PaymentTerms::Net60 => 60,
        }
    }

    /// Payment due date for goods delivered on `delivery`.
    pub fn due_date(self, delivery: NaiveDate) -> Option<NaiveDate> {
        delivery.checked_add_days(Days::new(self.days()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesOrderDraft {
    pub customer: String,
    pub delivery_date: NaiveDate,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// Whole percent, 0..=100.
    pub discount_percent: u8,
    pub payment_terms: PaymentTerms,
    pub sales_rep: Option<String>,
}

impl SalesOrderDraft {
    /// Quantity × unit price with the discount applied, rounded to the cent.
    pub fn line_total(&self) -> Money {
        let gross = self.unit_price.times(u64::from(self.quantity));
        gross.percent(100 - self.discount_percent.min(100))
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.payment_terms.due_date(self.delivery_date)
    }

    /// Checks that need no reference data. Customer and sales rep membership
    /// is checked by the caller against its directories.
    pub fn validate(&self, today: NaiveDate) -> DomainResult<()> {
        if self.customer.trim().is_empty() {
            return Err(DomainError::validation("customer cannot be empty"));
        }
        if self.delivery_date < today {
            return Err(DomainError::validation(format!(
                "delivery date {} is before today ({today})",
                self.delivery_date
            )));
        }
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if self.unit_price.cents() <= 0 {
            return Err(DomainError::validation("unit_price must be positive"));
        }
        if self.discount_percent > 100 {
            return Err(DomainError::validation(format!(
                "discount {}% exceeds 100%",
                self.discount_percent
            )));
        }
        if self.due_date().is_none() {
            return Err(DomainError::validation("due date is out of range"));
        }
        Ok(())
    }
}
