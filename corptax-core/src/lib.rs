pub mod calculations;
pub mod models;
pub mod pipeline;
pub mod report;

pub use calculations::corporate_tax::compute;
pub use calculations::period::normalize_period;
pub use models::*;
pub use pipeline::{PipelineError, RateMasterLookup, TaxPipeline};
pub use report::{FormattedRates, TaxReport};
