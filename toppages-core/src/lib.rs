pub mod error;
pub mod load;
pub mod model;
pub mod rank;
pub mod report;

pub use error::{ReportError, Result};
pub use model::{RankedPage, Variant, VariantReport};
pub use rank::Ranking;
pub use report::ReportFormat;

/// Number of rows printed per variant unless overridden.
pub const DEFAULT_TOP_K: usize = 10;
