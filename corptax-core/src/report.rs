//! Display payload for a computed filing.
//!
//! Pure presentation on top of [`TaxCalculation`]: rates, dates, and burden
//! ratios become display strings while every yen amount passes through
//! untouched, so UI rendering and filing-document generation consume one
//! serializable shape.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::TaxCalculation;

/// The nine rates as display strings, empty when a rate is not levied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRates {
    pub corporate_low: String,
    pub corporate_high: String,
    pub local_corporate: String,
    pub enterprise_low: String,
    pub enterprise_mid: String,
    pub enterprise_high: String,
    pub local_special: String,
    pub prefectural_corporate: String,
    pub municipal_corporate: String,
}

/// Serializable display payload of one filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReport {
    pub fiscal_start: String,
    pub fiscal_end: String,
    pub months_in_period: u32,
    pub months_truncated: u32,
    pub taxable_income: Decimal,
    pub rates: FormattedRates,
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
    pub local_corporate_base: Decimal,
    pub prefectural_base: Decimal,
    pub municipal_base: Decimal,
    pub corporate_total: Decimal,
    pub enterprise_total: Decimal,
    pub enterprise_with_special: Decimal,
    pub local_tax_total: Decimal,
    pub total_tax: Decimal,
    pub payment_rate: String,
    pub effective_rate: String,
}

impl TaxReport {
    /// Renders a calculation for display without altering any amount.
    pub fn from_calculation(calc: &TaxCalculation) -> Self {
        let c = &calc.components;
        let rates = &calc.input.rates;
        let total_tax = c.total_tax();
        let effective_base =
            calc.input.taxable_income + c.enterprise_total() + c.local_special;

        Self {
            fiscal_start: format_date(calc.input.period.fiscal_start),
            fiscal_end: format_date(calc.input.period.fiscal_end),
            months_in_period: calc.input.period.months_in_period,
            months_truncated: calc.input.period.months_truncated,
            taxable_income: calc.input.taxable_income,
            rates: FormattedRates {
                corporate_low: format_rate(rates.corporate_low),
                corporate_high: format_rate(rates.corporate_high),
                local_corporate: format_rate(rates.local_corporate),
                enterprise_low: format_rate(rates.enterprise_low),
                enterprise_mid: format_rate(rates.enterprise_mid),
                enterprise_high: format_rate(rates.enterprise_high),
                local_special: format_rate(rates.local_special),
                prefectural_corporate: format_rate(rates.prefectural_corporate),
                municipal_corporate: format_rate(rates.municipal_corporate),
            },
            corporate_low: c.corporate_low,
            corporate_high: c.corporate_high,
            corporate_tax: c.corporate_tax,
            local_corporate: c.local_corporate,
            enterprise_low: c.enterprise_low,
            enterprise_mid: c.enterprise_mid,
            enterprise_high: c.enterprise_high,
            local_special: c.local_special,
            prefectural_corporate: c.prefectural_corporate,
            prefectural_equalization: c.prefectural_equalization,
            municipal_corporate: c.municipal_corporate,
            municipal_equalization: c.municipal_equalization,
            local_corporate_base: calc.local_corporate_base,
            prefectural_base: calc.prefectural_base,
            municipal_base: calc.municipal_base,
            corporate_total: c.corporate_total(),
            enterprise_total: c.enterprise_total(),
            enterprise_with_special: c.enterprise_with_special(),
            local_tax_total: c.local_tax_total(),
            total_tax,
            payment_rate: format_ratio(total_tax, calc.input.taxable_income),
            effective_rate: format_ratio(total_tax, effective_base),
        }
    }
}

/// Formats a percentage for display: trailing zeros trimmed, empty when the
/// rate is not positive.
pub fn format_rate(rate: Decimal) -> String {
    if rate <= Decimal::ZERO {
        return String::new();
    }
    rate.normalize().to_string()
}

/// Compact `YYYY/MM/DD` date, empty when absent.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y/%m/%d").to_string())
        .unwrap_or_default()
}

/// Percentage ratio of `numerator` to `denominator`, half-up to one
/// decimal. Empty when the denominator is not positive.
fn format_ratio(numerator: Decimal, denominator: Decimal) -> String {
    if denominator <= Decimal::ZERO {
        return String::new();
    }
    (numerator / denominator * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::corporate_tax::compute;
    use crate::calculations::period::normalize_period;
    use crate::models::{EqualizationAmounts, TaxInput, TaxPeriod, TaxRates};

    fn full_year_input(income: Decimal) -> TaxInput {
        TaxInput {
            period: TaxPeriod::full_year(),
            taxable_income: income,
            rates: TaxRates::default(),
            equalization: EqualizationAmounts::default(),
        }
    }

    // =========================================================================
    // format_rate tests
    // =========================================================================

    #[test]
    fn format_rate_trims_trailing_zeros() {
        assert_eq!(format_rate(dec!(15.0)), "15");
        assert_eq!(format_rate(dec!(23.2)), "23.2");
        assert_eq!(format_rate(dec!(37.00)), "37");
    }

    #[test]
    fn format_rate_is_empty_for_non_positive_rates() {
        assert_eq!(format_rate(dec!(0)), "");
        assert_eq!(format_rate(dec!(-1.5)), "");
    }

    // =========================================================================
    // format_date tests
    // =========================================================================

    #[test]
    fn format_date_is_compact() {
        let date = NaiveDate::from_ymd_opt(2022, 4, 1);

        assert_eq!(format_date(date), "2022/04/01");
    }

    #[test]
    fn format_date_is_empty_when_absent() {
        assert_eq!(format_date(None), "");
    }

    // =========================================================================
    // report tests
    // =========================================================================

    #[test]
    fn report_carries_amounts_through_unchanged() {
        let calc = compute(full_year_input(dec!(9_000_000)));
        let report = TaxReport::from_calculation(&calc);

        assert_eq!(report.corporate_tax, dec!(1_432_000));
        assert_eq!(report.local_corporate, dec!(147_400));
        assert_eq!(report.enterprise_total, dec!(422_000));
        assert_eq!(report.enterprise_with_special, dec!(578_100));
        assert_eq!(report.local_tax_total, dec!(895_700));
        assert_eq!(report.total_tax, dec!(2_327_700));
        assert_eq!(report.local_corporate_base, dec!(1_432_000));
        assert_eq!(report.prefectural_base, dec!(1_432_000));
        assert_eq!(report.municipal_base, dec!(1_432_000));
    }

    #[test]
    fn report_formats_default_rates() {
        let calc = compute(full_year_input(dec!(9_000_000)));
        let report = TaxReport::from_calculation(&calc);

        assert_eq!(report.rates.corporate_low, "15");
        assert_eq!(report.rates.corporate_high, "23.2");
        assert_eq!(report.rates.local_corporate, "10.3");
        assert_eq!(report.rates.enterprise_low, "3.5");
        assert_eq!(report.rates.local_special, "37");
        assert_eq!(report.rates.prefectural_corporate, "1");
        assert_eq!(report.rates.municipal_corporate, "6");
    }

    #[test]
    fn burden_ratios_round_to_one_decimal() {
        let nine_million = TaxReport::from_calculation(&compute(full_year_input(dec!(9_000_000))));
        // 2,327,700 / 9,000,000 and 2,327,700 / 9,578,100.
        assert_eq!(nine_million.payment_rate, "25.9");
        assert_eq!(nine_million.effective_rate, "24.3");

        let one_million = TaxReport::from_calculation(&compute(full_year_input(dec!(1_000_000))));
        // 293,800 / 1,000,000 and 293,800 / 1,047,900.
        assert_eq!(one_million.payment_rate, "29.4");
        assert_eq!(one_million.effective_rate, "28.0");
    }

    #[test]
    fn burden_ratios_are_empty_without_positive_income() {
        let report = TaxReport::from_calculation(&compute(full_year_input(dec!(0))));

        assert_eq!(report.payment_rate, "");
        assert_eq!(report.effective_rate, "");
    }

    #[test]
    fn report_formats_fiscal_dates_from_the_period() {
        let period = normalize_period(
            NaiveDate::from_ymd_opt(2022, 4, 1),
            NaiveDate::from_ymd_opt(2023, 1, 31),
            None,
            None,
        );
        let calc = compute(TaxInput {
            period,
            taxable_income: dec!(5_000_000),
            rates: TaxRates::default(),
            equalization: EqualizationAmounts::default(),
        });
        let report = TaxReport::from_calculation(&calc);

        assert_eq!(report.fiscal_start, "2022/04/01");
        assert_eq!(report.fiscal_end, "2023/01/31");
        assert_eq!(report.months_in_period, 10);
        assert_eq!(report.months_truncated, 10);
    }
}
