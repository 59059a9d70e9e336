//! Implements the complete interpretation of CPT soundings and the analysis reports

mod batch;
mod report;
mod sounding_analysis;
pub use crate::analysis::batch::*;
pub use crate::analysis::report::*;
pub use crate::analysis::sounding_analysis::*;
