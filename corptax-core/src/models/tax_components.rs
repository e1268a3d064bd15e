use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-tax sub-amounts of one filing, in whole yen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComponents {
    pub corporate_low: Decimal,
    pub corporate_high: Decimal,
    pub corporate_tax: Decimal,
    pub local_corporate: Decimal,
    pub enterprise_low: Decimal,
    pub enterprise_mid: Decimal,
    pub enterprise_high: Decimal,
    pub local_special: Decimal,
    pub prefectural_corporate: Decimal,
    pub prefectural_equalization: Decimal,
    pub municipal_corporate: Decimal,
    pub municipal_equalization: Decimal,
}

impl TaxComponents {
    /// National corporate tax after the hundred-yen floor.
    pub fn corporate_total(&self) -> Decimal {
        self.corporate_tax
    }

    /// Sum of the three enterprise tax bands.
    pub fn enterprise_total(&self) -> Decimal {
        self.enterprise_low + self.enterprise_mid + self.enterprise_high
    }

    /// Enterprise tax plus the special surcharge levied on it.
    pub fn enterprise_with_special(&self) -> Decimal {
        self.enterprise_total() + self.local_special
    }

    /// All local levies combined.
    pub fn local_tax_total(&self) -> Decimal {
        self.local_corporate
            + self.enterprise_total()
            + self.local_special
            + self.prefectural_corporate
            + self.prefectural_equalization
            + self.municipal_corporate
            + self.municipal_equalization
    }

    /// National plus local tax.
    pub fn total_tax(&self) -> Decimal {
        self.corporate_total() + self.local_tax_total()
    }
}
