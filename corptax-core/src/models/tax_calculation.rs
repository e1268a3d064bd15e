use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{IncomeBands, TaxComponents, TaxInput};

/// Complete result of one computation, kept together for audit display.
///
/// The three base amounts are floored to the thousand independently from the
/// same rounded corporate tax; downstream payloads expose all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    pub input: TaxInput,
    pub bands: IncomeBands,
    pub components: TaxComponents,
    pub local_corporate_base: Decimal,
    pub prefectural_base: Decimal,
    pub municipal_base: Decimal,
}
