use serde::{Deserialize, Serialize};

/// Sales representative selectable on a new sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRep {
    /// Short handle, e.g. "maria".
    pub id: String,
    pub name: String,
}

impl SalesRep {
    /// True if `value` is this rep's handle or full name.
    pub fn matches(&self, value: &str) -> bool {
        self.id == value || self.name == value
    }
}

/// Look a rep up by handle or full name.
pub fn find_rep<'a>(reps: &'a [SalesRep], value: &str) -> Option<&'a SalesRep> {
    reps.iter().find(|r| r.matches(value))
}
