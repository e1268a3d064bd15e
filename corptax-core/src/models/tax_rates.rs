use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The nine percentage rates of one filing, in percentage points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    pub corporate_low: Decimal,
    pub corporate_high: Decimal,
    pub local_corporate: Decimal,
    pub enterprise_low: Decimal,
    pub enterprise_mid: Decimal,
    pub enterprise_high: Decimal,
    pub local_special: Decimal,
    pub prefectural_corporate: Decimal,
    pub municipal_corporate: Decimal,
}

impl Default for TaxRates {
    /// The statutory fallback table, substituted per field when a rate
    /// master value is missing or non-positive.
    fn default() -> Self {
        Self {
            corporate_low: Decimal::new(150, 1),
            corporate_high: Decimal::new(232, 1),
            local_corporate: Decimal::new(103, 1),
            enterprise_low: Decimal::new(35, 1),
            enterprise_mid: Decimal::new(53, 1),
            enterprise_high: Decimal::new(70, 1),
            local_special: Decimal::new(370, 1),
            prefectural_corporate: Decimal::new(10, 1),
            municipal_corporate: Decimal::new(60, 1),
        }
    }
}

/// Flat annual minimum taxes, prorated by the truncated month count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualizationAmounts {
    pub prefectural: Decimal,
    pub municipal: Decimal,
}

impl Default for EqualizationAmounts {
    fn default() -> Self {
        Self {
            prefectural: Decimal::new(20_000, 0),
            municipal: Decimal::new(50_000, 0),
        }
    }
}
