use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EqualizationAmounts, TaxPeriod, TaxRates};

/// Fully resolved input of one computation. The engine clamps
/// `taxable_income` to zero when negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub period: TaxPeriod,
    pub taxable_income: Decimal,
    pub rates: TaxRates,
    pub equalization: EqualizationAmounts,
}
