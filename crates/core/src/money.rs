//! Currency amounts.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub};
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// Amount in the smallest currency unit (cents).
///
/// Serialized as a decimal amount in whole currency units (`85.5`, `25000.0`),
/// the same unit the dataset file uses.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units (dollars).
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Convert a decimal amount (as found in the dataset) to the nearest cent.
    ///
    /// The input is a binary float, so an amount written with an exact half
    /// cent may land on either side (`1.005` gives 100 cents). Parse the text
    /// with [`str::parse`] when the decimal digits are available.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "amount {amount} cannot be negative"
            )));
        }
        Self::from_signed_decimal(amount)
    }

    /// Like [`Money::from_decimal`] but accepts negative amounts (losses,
    /// adjustments).
    pub fn from_signed_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation(format!(
                "amount {amount} is not a finite number"
            )));
        }
        let cents = (amount * 100.0).round();
        if cents.abs() > i64::MAX as f64 {
            return Err(DomainError::validation(format!(
                "amount {amount} is out of range"
            )));
        }
        Ok(Self(cents as i64))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(self, quantity: u64) -> Self {
        let quantity = i64::try_from(quantity).unwrap_or(i64::MAX);
        Self(self.0.saturating_mul(quantity))
    }

    /// Apply a percentage (0..=100) and round to the nearest cent.
    pub fn percent(self, pct: u8) -> Self {
        let scaled = i128::from(self.0) * i128::from(pct);
        let rounded = (scaled + 50).div_euclid(100);
        Self(i64::try_from(rounded).unwrap_or(i64::MAX))
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Exact decimal parse (`1250.50`, `-3`, `.75`). Digits past the cent are
    /// rounded half away from zero on the third decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("{s:?} is not an amount"));
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut decimals = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = decimals.next().unwrap_or(0);
        let hundredths = decimals.next().unwrap_or(0);
        let carry = i64::from(decimals.next().is_some_and(|d| d >= 5));

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + carry))
            .ok_or_else(|| DomainError::validation(format!("amount {s} is out of range")))?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_signed_decimal(amount).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// `$12,825`, `$85.50`, `-$1,000`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = group_thousands(abs / 100);
        let cents = abs % 100;
        if cents == 0 {
            write!(f, "{sign}${units}")
        } else {
            write!(f, "{sign}${units}.{cents:02}")
        }
    }
}

/// Format an integer with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_groups_thousands_and_hides_zero_cents() {
        assert_eq!(Money::from_units(34_025).to_string(), "$34,025");
        assert_eq!(Money::from_units(1_250_000).to_string(), "$1,250,000");
        assert_eq!(Money::from_cents(8_550).to_string(), "$85.50");
        assert_eq!(Money::from_units(0).to_string(), "$0");
        assert_eq!(Money::from_units(-1_000).to_string(), "-$1,000");
    }

    #[test]
    fn from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(85.5).unwrap(), Money::from_cents(8_550));
        assert_eq!(Money::from_decimal(0.125).unwrap().cents(), 13);
        assert_eq!(Money::from_decimal(12825.0).unwrap(), Money::from_units(12_825));
    }

    #[test]
    fn text_parse_is_exact() {
        assert_eq!("1.005".parse::<Money>().unwrap(), Money::from_cents(101));
        assert_eq!("1250.50".parse::<Money>().unwrap(), Money::from_cents(125_050));
        assert_eq!(".75".parse::<Money>().unwrap(), Money::from_cents(75));
        assert_eq!("-3".parse::<Money>().unwrap(), Money::from_units(-3));
        assert_eq!("85.504".parse::<Money>().unwrap(), Money::from_cents(8_550));
        for bad in ["", ".", "-", "1,5", "1.2.3", "12a", "+4"] {
            assert!(bad.parse::<Money>().is_err(), "{bad:?} parsed");
        }
        // the float path cannot see the half cent
        assert_eq!(Money::from_decimal(1.005).unwrap().cents(), 100);
    }

    #[test]
    fn serializes_as_decimal_units() {
        assert_eq!(serde_json::to_string(&Money::from_cents(8_550)).unwrap(), "85.5");
        assert_eq!(serde_json::to_string(&Money::from_units(25_000)).unwrap(), "25000.0");
        let back: Money = serde_json::from_str("1200.75").unwrap();
        assert_eq!(back, Money::from_cents(120_075));
    }

    #[test]
    fn from_decimal_rejects_negative_and_nan() {
        assert!(matches!(Money::from_decimal(-1.0), Err(DomainError::Validation(_))));
        assert!(matches!(Money::from_decimal(f64::NAN), Err(DomainError::Validation(_))));
    }

    #[test]
    fn signed_decimal_allows_losses() {
        assert_eq!(Money::from_signed_decimal(-2_100.5).unwrap(), Money::from_cents(-210_050));
        assert!(Money::from_signed_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn times_and_percent() {
        let price = Money::from_cents(8_550);
        assert_eq!(price.times(150), Money::from_units(12_825));
        assert_eq!(Money::from_units(200).percent(15), Money::from_units(30));
        assert_eq!(Money::from_cents(1).percent(50), Money::from_cents(1));
    }

    #[test]
    fn sum_over_references() {
        let amounts = [Money::from_units(1), Money::from_units(2)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_units(3));
    }
}
