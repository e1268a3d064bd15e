use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-component income split, prorated by the period length.
///
/// The corporate split caps the lower-rate band at the prorated eight
/// million ceiling; the enterprise split cuts income into three prorated
/// four-million bands, each with the raw income share and the
/// thousand-floored taxable base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBands {
    pub income_under_limit: Decimal,
    pub income_under: Decimal,
    pub income_over: Decimal,
    pub income_under_4m: Decimal,
    pub base_under_4m: Decimal,
    pub income_4m_to_8m: Decimal,
    pub base_4m_to_8m: Decimal,
    pub income_over_8m: Decimal,
    pub base_over_8m: Decimal,
}
