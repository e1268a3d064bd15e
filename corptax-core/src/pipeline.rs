//! Orchestration facade for callers that only hold an income figure and a
//! rate source.
//!
//! The pipeline resolves the rate table (explicit master, or a lookup
//! against the period), assembles the [`TaxInput`], and runs the
//! computation. Configuring neither rate source is the single fatal error
//! in the engine; everything else resolves by defaulting.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::corporate_tax::compute;
use crate::calculations::rates::{resolve_equalization, resolve_rates};
use crate::models::{RateMaster, TaxCalculation, TaxInput, TaxPeriod};

/// Errors raised by [`TaxPipeline`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The pipeline was configured with neither an explicit rate master
    /// nor a rate-master lookup.
    #[error("no rate master or rate-master lookup configured")]
    MissingRateSource,
}

/// Rate-master lookup seam, implemented by persistence layers.
///
/// Any `Fn(&TaxPeriod) -> Option<RateMaster>` implements this, so a bare
/// closure serves as the resolver callback.
pub trait RateMasterLookup {
    /// Finds the rate master applicable to `period`, if any.
    fn find_for(&self, period: &TaxPeriod) -> Option<RateMaster>;
}

impl<F> RateMasterLookup for F
where
    F: Fn(&TaxPeriod) -> Option<RateMaster>,
{
    fn find_for(&self, period: &TaxPeriod) -> Option<RateMaster> {
        self(period)
    }
}

/// Facade composing rate resolution and the tax computation.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use corptax_core::{RateMaster, TaxPeriod, TaxPipeline};
///
/// let pipeline = TaxPipeline::new().with_rate_master(RateMaster::default());
/// let calc = pipeline.run(dec!(1_000_000), TaxPeriod::full_year()).unwrap();
///
/// assert_eq!(calc.components.corporate_tax, dec!(150_000));
/// assert_eq!(calc.components.local_corporate, dec!(15_400));
/// ```
#[derive(Default)]
pub struct TaxPipeline<'a> {
    rate_master: Option<RateMaster>,
    rate_lookup: Option<&'a dyn RateMasterLookup>,
}

impl<'a> TaxPipeline<'a> {
    pub fn new() -> Self {
        Self {
            rate_master: None,
            rate_lookup: None,
        }
    }

    /// Uses an already-resolved rate master. Wins over a lookup.
    pub fn with_rate_master(mut self, master: RateMaster) -> Self {
        self.rate_master = Some(master);
        self
    }

    /// Uses a lookup to resolve the rate master for the period at hand.
    pub fn with_rate_lookup(mut self, lookup: &'a dyn RateMasterLookup) -> Self {
        self.rate_lookup = Some(lookup);
        self
    }

    /// Resolves rates, assembles the input, and computes the breakdown.
    ///
    /// A lookup that finds no master for the period resolves to the full
    /// default rate table.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingRateSource`] when neither
    /// [`with_rate_master`](Self::with_rate_master) nor
    /// [`with_rate_lookup`](Self::with_rate_lookup) was called.
    pub fn run(
        &self,
        taxable_income: Decimal,
        period: TaxPeriod,
    ) -> Result<TaxCalculation, PipelineError> {
        let master = match (&self.rate_master, self.rate_lookup) {
            (Some(master), _) => Some(master.clone()),
            (None, Some(lookup)) => lookup.find_for(&period),
            (None, None) => return Err(PipelineError::MissingRateSource),
        };

        let rates = resolve_rates(master.as_ref());
        let equalization = resolve_equalization(master.as_ref());
        tracing::debug!(
            months_in_period = period.months_in_period,
            months_truncated = period.months_truncated,
            %taxable_income,
            "computing corporate tax breakdown"
        );

        Ok(compute(TaxInput {
            period,
            taxable_income,
            rates,
            equalization,
        }))
    }
}
