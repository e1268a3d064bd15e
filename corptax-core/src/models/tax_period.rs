use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized fiscal period. Both month counts are at least one; see
/// [`crate::calculations::period::normalize_period`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPeriod {
    pub fiscal_start: Option<NaiveDate>,
    pub fiscal_end: Option<NaiveDate>,
    pub months_in_period: u32,
    pub months_truncated: u32,
}

impl TaxPeriod {
    /// A dateless twelve-month period.
    pub fn full_year() -> Self {
        Self {
            fiscal_start: None,
            fiscal_end: None,
            months_in_period: 12,
            months_truncated: 12,
        }
    }
}
