mod income_bands;
mod rate_master;
mod tax_calculation;
mod tax_components;
mod tax_input;
mod tax_period;
mod tax_rates;

pub use income_bands::IncomeBands;
pub use rate_master::RateMaster;
pub use tax_calculation::TaxCalculation;
pub use tax_components::TaxComponents;
pub use tax_input::TaxInput;
pub use tax_period::TaxPeriod;
pub use tax_rates::{EqualizationAmounts, TaxRates};
