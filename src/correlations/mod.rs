//! Implements empirical CPT correlations for settlement parameters

mod formulas;
mod layer_parameters;
pub use crate::correlations::formulas::*;
pub use crate::correlations::layer_parameters::*;
