//! Rate-table resolution.
//!
//! Merges a possibly partial [`RateMaster`] against the statutory default
//! table. Resolution is per field, not all-or-nothing: a value is taken
//! from the master only when it is present and positive, so a missing
//! master simply yields the whole default table.

use rust_decimal::Decimal;

use crate::models::{EqualizationAmounts, RateMaster, TaxRates};

/// Resolves the nine percentage rates from an optional rate master.
pub fn resolve_rates(master: Option<&RateMaster>) -> TaxRates {
    let defaults = TaxRates::default();
    let Some(master) = master else {
        tracing::debug!("no rate master supplied, using the default rate table");
        return defaults;
    };

    TaxRates {
        corporate_low: field_or(master.corporate_low, defaults.corporate_low),
        corporate_high: field_or(master.corporate_high, defaults.corporate_high),
        local_corporate: field_or(master.local_corporate, defaults.local_corporate),
        enterprise_low: field_or(master.enterprise_low, defaults.enterprise_low),
        enterprise_mid: field_or(master.enterprise_mid, defaults.enterprise_mid),
        enterprise_high: field_or(master.enterprise_high, defaults.enterprise_high),
        local_special: field_or(master.local_special, defaults.local_special),
        prefectural_corporate: field_or(
            master.prefectural_corporate,
            defaults.prefectural_corporate,
        ),
        municipal_corporate: field_or(
            master.municipal_corporate,
            defaults.municipal_corporate,
        ),
    }
}

/// Resolves the flat equalization amounts from an optional rate master.
pub fn resolve_equalization(master: Option<&RateMaster>) -> EqualizationAmounts {
    let defaults = EqualizationAmounts::default();
    let Some(master) = master else {
        return defaults;
    };

    EqualizationAmounts {
        prefectural: field_or(master.equalization_prefectural, defaults.prefectural),
        municipal: field_or(master.equalization_municipal, defaults.municipal),
    }
}

fn field_or(value: Option<Decimal>, default: Decimal) -> Decimal {
    match value {
        Some(value) if value > Decimal::ZERO => value,
        _ => default,
    }
}
