//! Calculation modules for the corporate tax filing breakdown.

pub mod common;
pub mod corporate_tax;
pub mod period;
pub mod rates;

pub use corporate_tax::compute;
pub use period::normalize_period;
pub use rates::{resolve_equalization, resolve_rates};
