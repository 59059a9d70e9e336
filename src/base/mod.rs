//! Implements the base structures for a CPT analysis

mod config;
mod constants;
mod errors;
mod file_io;
mod samples;
mod stats;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::errors::*;
pub use crate::base::file_io::*;
pub use crate::base::samples::*;
pub use crate::base::stats::*;
