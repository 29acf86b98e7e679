//! Aggregate statistics over record lists.
//!
//! Summaries are recomputed from the full list every time they are needed;
//! nothing here caches or updates incrementally.

use std::collections::HashSet;
use std::hash::Hash;

use crate::money::Money;

/// A record type with a module-level summary.
pub trait Summarize: Sized {
    type Summary;

    fn summarize(records: &[Self]) -> Self::Summary;
}

/// Number of records matching `predicate`.
pub fn count_where<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

/// Sum of a monetary field over all records.
pub fn sum_money<T>(records: &[T], field: impl Fn(&T) -> Money) -> Money {
    records.iter().map(field).sum()
}

/// Sum of a monetary field over the records matching `predicate`.
pub fn sum_money_where<T>(
    records: &[T],
    predicate: impl Fn(&T) -> bool,
    field: impl Fn(&T) -> Money,
) -> Money {
    records.iter().filter(|r| predicate(r)).map(field).sum()
}

/// Number of distinct values of `key`.
pub fn distinct_count<'a, T, K>(records: &'a [T], key: impl Fn(&'a T) -> K) -> usize
where
    K: Eq + Hash,
{
    records.iter().map(key).collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    struct Line {
        place: &'static str,
        amount: Money,
        open: bool,
    }

    fn lines() -> Vec<Line> {
        vec![
            Line { place: "A-1", amount: Money::from_units(10), open: true },
            Line { place: "B-2", amount: Money::from_units(25), open: false },
            Line { place: "A-1", amount: Money::from_units(5), open: true },
        ]
    }

    #[test]
    fn counts_sums_and_distincts() {
        let lines = lines();
        assert_eq!(count_where(&lines, |l| l.open), 2);
        assert_eq!(sum_money(&lines, |l| l.amount), Money::from_units(40));
        assert_eq!(sum_money_where(&lines, |l| l.open, |l| l.amount), Money::from_units(15));
        assert_eq!(distinct_count(&lines, |l| l.place), 2);
    }

    #[test]
    fn empty_list_aggregates_to_zero() {
        let empty: Vec<Line> = Vec::new();
        assert_eq!(count_where(&empty, |_| true), 0);
        assert_eq!(sum_money(&empty, |l| l.amount), Money::ZERO);
        assert_eq!(distinct_count(&empty, |l| l.place), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a predicate sum equals the plain sum over exactly the
        /// matching records, whatever the order of the list.
        #[test]
        fn sum_where_matches_manual_sum_and_ignores_order(
            cents in prop::collection::vec((0i64..10_000_000, prop::bool::ANY), 0..30),
        ) {
            let records: Vec<(Money, bool)> = cents
                .iter()
                .map(|(c, open)| (Money::from_cents(*c), *open))
                .collect();

            let expected: i64 = cents.iter().filter(|(_, open)| *open).map(|(c, _)| c).sum();
            let total = sum_money_where(&records, |r| r.1, |r| r.0);
            prop_assert_eq!(total.cents(), expected);

            let mut reversed = records.clone();
            reversed.reverse();
            prop_assert_eq!(sum_money_where(&reversed, |r| r.1, |r| r.0), total);
        }
    }
}
