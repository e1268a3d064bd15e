use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate-master record as a persistence layer supplies it, keyed by the
/// fiscal-start-date range it is valid for.
///
/// Every field is optional: a missing or non-positive value resolves to its
/// statutory default, field by field (see [`crate::calculations::rates`]).
/// `RateMaster::default()` is therefore the "all defaults" record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateMaster {
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub corporate_low: Option<Decimal>,
    pub corporate_high: Option<Decimal>,
    pub local_corporate: Option<Decimal>,
    pub enterprise_low: Option<Decimal>,
    pub enterprise_mid: Option<Decimal>,
    pub enterprise_high: Option<Decimal>,
    pub local_special: Option<Decimal>,
    pub prefectural_corporate: Option<Decimal>,
    pub municipal_corporate: Option<Decimal>,
    pub equalization_prefectural: Option<Decimal>,
    pub equalization_municipal: Option<Decimal>,
}

impl RateMaster {
    /// Whether `date` falls inside this record's validity range.
    /// An open bound matches everything on that side.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.valid_from.is_none_or(|from| date >= from)
            && self.valid_to.is_none_or(|to| date <= to)
    }
}
