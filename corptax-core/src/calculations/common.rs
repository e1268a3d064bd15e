//! Monetary primitives shared by the corporate tax calculations.
//!
//! All amounts are whole-yen values carried as [`Decimal`]; arithmetic stays
//! in exact decimal form end to end because the statutory rounding happens
//! at exact digit boundaries (yen, hundred yen, thousand yen). Every
//! primitive treats non-positive input as zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Applies a percentage rate to a yen amount: `base * rate / 100`, rounded
/// half-up to the whole yen.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use corptax_core::calculations::common::apply_rate;
///
/// assert_eq!(apply_rate(dec!(1_000_000), dec!(15.0)), dec!(150_000));
/// assert_eq!(apply_rate(dec!(150_000), dec!(10.3)), dec!(15_450));
/// assert_eq!(apply_rate(dec!(-5_000), dec!(15.0)), dec!(0));
/// ```
pub fn apply_rate(base: Decimal, rate: Decimal) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (base * rate / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds up to the next thousand yen.
pub fn ceil_to_thousand(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (value / Decimal::ONE_THOUSAND).ceil() * Decimal::ONE_THOUSAND
}

/// Drops everything below the thousand yen.
pub fn floor_to_thousand(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (value / Decimal::ONE_THOUSAND).floor() * Decimal::ONE_THOUSAND
}

/// Drops everything below the hundred yen.
pub fn floor_to_hundred(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (value / Decimal::ONE_HUNDRED).floor() * Decimal::ONE_HUNDRED
}

/// Scales an annual amount to a month count: `amount * months / 12`.
///
/// The multiplication happens before the division so that twelve-month
/// prorations stay exact under decimal arithmetic.
pub fn prorate_annual(amount: Decimal, months: u32) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount * Decimal::from(months) / Decimal::from(12_u32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // apply_rate tests
    // =========================================================================

    #[test]
    fn apply_rate_rounds_down_below_the_midpoint() {
        // 123,450 * 7.77% = 9,592.0665
        assert_eq!(apply_rate(dec!(123_450), dec!(7.77)), dec!(9_592));
    }

    #[test]
    fn apply_rate_rounds_up_at_the_midpoint() {
        // 10 * 15% = 1.5
        assert_eq!(apply_rate(dec!(10), dec!(15.0)), dec!(2));
    }

    #[test]
    fn apply_rate_is_exact_on_whole_products() {
        assert_eq!(apply_rate(dec!(8_000_000), dec!(15.0)), dec!(1_200_000));
        assert_eq!(apply_rate(dec!(1_000_000), dec!(23.2)), dec!(232_000));
    }

    #[test]
    fn apply_rate_treats_non_positive_base_as_zero() {
        assert_eq!(apply_rate(dec!(0), dec!(15.0)), dec!(0));
        assert_eq!(apply_rate(dec!(-1_000_000), dec!(15.0)), dec!(0));
    }

    // =========================================================================
    // ceil_to_thousand tests
    // =========================================================================

    #[test]
    fn ceil_to_thousand_rounds_up_partial_thousands() {
        assert_eq!(ceil_to_thousand(dec!(6_666_666.67)), dec!(6_667_000));
        assert_eq!(ceil_to_thousand(dec!(1)), dec!(1_000));
    }

    #[test]
    fn ceil_to_thousand_keeps_whole_thousands() {
        assert_eq!(ceil_to_thousand(dec!(8_000_000)), dec!(8_000_000));
    }

    #[test]
    fn ceil_to_thousand_treats_non_positive_as_zero() {
        assert_eq!(ceil_to_thousand(dec!(0)), dec!(0));
        assert_eq!(ceil_to_thousand(dec!(-500)), dec!(0));
    }

    // =========================================================================
    // floor_to_thousand tests
    // =========================================================================

    #[test]
    fn floor_to_thousand_drops_partial_thousands() {
        assert_eq!(floor_to_thousand(dec!(1_999)), dec!(1_000));
        assert_eq!(floor_to_thousand(dec!(3_333_333.33)), dec!(3_333_000));
    }

    #[test]
    fn floor_to_thousand_keeps_whole_thousands() {
        assert_eq!(floor_to_thousand(dec!(2_000)), dec!(2_000));
    }

    #[test]
    fn floor_to_thousand_treats_non_positive_as_zero() {
        assert_eq!(floor_to_thousand(dec!(999)), dec!(0));
        assert_eq!(floor_to_thousand(dec!(-1_999)), dec!(0));
    }

    // =========================================================================
    // floor_to_hundred tests
    // =========================================================================

    #[test]
    fn floor_to_hundred_drops_partial_hundreds() {
        assert_eq!(floor_to_hundred(dec!(15_450)), dec!(15_400));
        assert_eq!(floor_to_hundred(dec!(147_496)), dec!(147_400));
    }

    #[test]
    fn floor_to_hundred_keeps_whole_hundreds() {
        assert_eq!(floor_to_hundred(dec!(150_000)), dec!(150_000));
    }

    #[test]
    fn floor_to_hundred_treats_non_positive_as_zero() {
        assert_eq!(floor_to_hundred(dec!(99)), dec!(0));
        assert_eq!(floor_to_hundred(dec!(-100)), dec!(0));
    }

    // =========================================================================
    // prorate_annual tests
    // =========================================================================

    #[test]
    fn prorate_annual_is_exact_for_twelve_months() {
        assert_eq!(prorate_annual(dec!(20_000), 12), dec!(20_000));
        assert_eq!(prorate_annual(dec!(8_000_000), 12), dec!(8_000_000));
    }

    #[test]
    fn prorate_annual_scales_short_periods() {
        assert_eq!(prorate_annual(dec!(12_000), 10), dec!(10_000));
        // 20,000 * 10 / 12 = 16,666.66..., settled by the hundred floor
        assert_eq!(floor_to_hundred(prorate_annual(dec!(20_000), 10)), dec!(16_600));
    }

    #[test]
    fn prorate_annual_treats_non_positive_as_zero() {
        assert_eq!(prorate_annual(dec!(0), 10), dec!(0));
        assert_eq!(prorate_annual(dec!(-20_000), 10), dec!(0));
    }
}
