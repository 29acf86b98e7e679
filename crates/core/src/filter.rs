//! Search/filter predicate shared by every record table.
//!
//! A record is visible iff
//! `(query is empty OR query ⊂ key₁ OR query ⊂ key₂) AND (category is All OR category == record.category)`,
//! where `⊂` is a case-insensitive substring test. Filtering is stable: the
//! visible set keeps the input order.

use core::str::FromStr;

use crate::code::CodedEnum;
use crate::error::DomainError;

/// Sentinel accepted in place of a category code to disable the filter.
pub const ALL_SENTINEL: &str = "all";

/// Records that can be searched and filtered.
pub trait Searchable {
    type Category: Copy + PartialEq;

    /// The two fields the free-text query is matched against.
    fn search_keys(&self) -> [&str; 2];

    /// The field the categorical filter compares with.
    fn category(&self) -> Self::Category;
}

/// Optional equality filter on a record's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    pub fn accepts(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// The selected category, `None` for "all".
    pub fn selected(&self) -> Option<C> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(*c),
        }
    }
}

impl<C: CodedEnum> FromStr for CategoryFilter<C> {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            Ok(CategoryFilter::All)
        } else {
            C::from_code(s).map(CategoryFilter::Only)
        }
    }
}

/// Current filter state of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter<C> {
    /// Lowercased query.
    needle: String,
    category: CategoryFilter<C>,
}

impl<C> Default for RecordFilter<C> {
    fn default() -> Self {
        Self {
            needle: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: Copy + PartialEq> RecordFilter<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.needle = query.as_ref().to_lowercase();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter<C>) -> Self {
        self.category = category;
        self
    }

    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Searchable<Category = C>,
    {
        self.matches_query(record) && self.category.accepts(record.category())
    }

    fn matches_query<T: Searchable>(&self, record: &T) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record
            .search_keys()
            .iter()
            .any(|key| key.to_lowercase().contains(&self.needle))
    }

    /// Visible subset of `records`, in input order.
    pub fn apply<'a, T>(&self, records: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable<Category = C>,
    {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}
