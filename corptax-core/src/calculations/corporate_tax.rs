//! Corporate tax computation.
//!
//! Turns a company's taxable income, fiscal-period length, and resolved
//! rate table into the itemized breakdown of national corporate tax and
//! the five local taxes levied on top of it. A one-yen rounding error here
//! is a wrong filing, so every amount is rounded at its own statutory
//! boundary, in a fixed order:
//!
//! | Step | Amount | Rounding |
//! |------|--------|----------|
//! | 1 | lower-band income | capped at 8,000,000 × months / 12, ceiling to thousand |
//! | 2 | upper-band income | floor to thousand |
//! | 3 | corporate tax | per-band rate half-up to yen, sum floored to hundred |
//! | 4 | enterprise bases | three bands of 4,000,000 × months / 12, floor to thousand |
//! | 5 | enterprise tax | low band half-up only; mid and high floored to hundred |
//! | 6 | local special tax | surcharge on the enterprise total, floor to hundred |
//! | 7 | local corporate tax | corporate tax refloored to thousand, result to hundred |
//! | 8 | prefectural / municipal | same refloored base, plus equalization prorated by the truncated months |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use corptax_core::calculations::corporate_tax::compute;
//! use corptax_core::{EqualizationAmounts, TaxInput, TaxPeriod, TaxRates};
//!
//! let input = TaxInput {
//!     period: TaxPeriod::full_year(),
//!     taxable_income: dec!(9_000_000),
//!     rates: TaxRates::default(),
//!     equalization: EqualizationAmounts::default(),
//! };
//!
//! let calc = compute(input);
//!
//! assert_eq!(calc.components.corporate_tax, dec!(1_432_000));
//! assert_eq!(calc.components.local_corporate, dec!(147_400));
//! assert_eq!(calc.components.total_tax(), dec!(2_327_700));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{
    apply_rate, ceil_to_thousand, floor_to_hundred, floor_to_thousand, prorate_annual,
};
use crate::models::{IncomeBands, TaxCalculation, TaxComponents, TaxInput};

/// Annual size of the corporate lower-rate band, in yen.
const CORPORATE_BAND_ANNUAL: Decimal = Decimal::from_parts(8_000_000, 0, 0, false, 0);

/// Annual width of each enterprise income band, in yen.
const ENTERPRISE_BAND_ANNUAL: Decimal = Decimal::from_parts(4_000_000, 0, 0, false, 0);

/// Computes the full itemized breakdown for one filing.
///
/// Pure and total: negative income is clamped to zero and every degenerate
/// input resolves deterministically, so this never fails and any number of
/// threads may call it concurrently.
pub fn compute(input: TaxInput) -> TaxCalculation {
    let taxable_income = input.taxable_income.max(Decimal::ZERO);

    let bands = income_bands(taxable_income, input.period.months_in_period);

    let corporate_low = apply_rate(bands.income_under, input.rates.corporate_low);
    let corporate_high = apply_rate(bands.income_over, input.rates.corporate_high);
    let corporate_tax = floor_to_hundred(corporate_low + corporate_high);

    // The filing form floors only the mid and high bands to the hundred;
    // the low band keeps its raw half-up rounding.
    let enterprise_low = apply_rate(bands.base_under_4m, input.rates.enterprise_low);
    let enterprise_mid =
        floor_to_hundred(apply_rate(bands.base_4m_to_8m, input.rates.enterprise_mid));
    let enterprise_high =
        floor_to_hundred(apply_rate(bands.base_over_8m, input.rates.enterprise_high));
    let enterprise_total = enterprise_low + enterprise_mid + enterprise_high;

    let local_special =
        floor_to_hundred(enterprise_total * input.rates.local_special / Decimal::ONE_HUNDRED);

    // Each local levy refloors the rounded corporate tax on its own; the
    // audit payload exposes all three bases separately.
    let local_corporate_base = floor_to_thousand(corporate_tax);
    let local_corporate =
        floor_to_hundred(apply_rate(local_corporate_base, input.rates.local_corporate));

    let prefectural_base = floor_to_thousand(corporate_tax);
    let prefectural_corporate =
        floor_to_hundred(apply_rate(prefectural_base, input.rates.prefectural_corporate));
    let prefectural_equalization =
        prorated_equalization(input.equalization.prefectural, input.period.months_truncated);

    let municipal_base = floor_to_thousand(corporate_tax);
    let municipal_corporate =
        floor_to_hundred(apply_rate(municipal_base, input.rates.municipal_corporate));
    let municipal_equalization =
        prorated_equalization(input.equalization.municipal, input.period.months_truncated);

    TaxCalculation {
        input,
        bands,
        components: TaxComponents {
            corporate_low,
            corporate_high,
            corporate_tax,
            local_corporate,
            enterprise_low,
            enterprise_mid,
            enterprise_high,
            local_special,
            prefectural_corporate,
            prefectural_equalization,
            municipal_corporate,
            municipal_equalization,
        },
        local_corporate_base,
        prefectural_base,
        municipal_base,
    }
}

/// Splits non-negative taxable income into the corporate and enterprise
/// rate bands, each prorated by the period length.
fn income_bands(taxable_income: Decimal, months_in_period: u32) -> IncomeBands {
    let income_under_limit =
        ceil_to_thousand(prorate_annual(CORPORATE_BAND_ANNUAL, months_in_period));
    let income_under = taxable_income.min(income_under_limit);
    let income_over = floor_to_thousand(taxable_income - income_under);

    // The enterprise band width stays unrounded; it is only a comparison
    // threshold, the taxable bases are floored below.
    let band_limit = prorate_annual(ENTERPRISE_BAND_ANNUAL, months_in_period);
    let income_under_4m = taxable_income.min(band_limit);
    let base_under_4m = floor_to_thousand(income_under_4m);
    let income_4m_to_8m = (taxable_income - band_limit).max(Decimal::ZERO);
    let base_4m_to_8m = floor_to_thousand(income_4m_to_8m.min(band_limit));
    let income_over_8m = (taxable_income - band_limit * Decimal::TWO).max(Decimal::ZERO);
    let base_over_8m = floor_to_thousand(income_over_8m);

    IncomeBands {
        income_under_limit,
        income_under,
        income_over,
        income_under_4m,
        base_under_4m,
        income_4m_to_8m,
        base_4m_to_8m,
        income_over_8m,
        base_over_8m,
    }
}

/// Prorates a flat annual equalization amount by the truncated month count.
fn prorated_equalization(annual: Decimal, months_truncated: u32) -> Decimal {
    floor_to_hundred(prorate_annual(annual, months_truncated))
}
