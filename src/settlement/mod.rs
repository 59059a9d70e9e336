//! Implements the settlement analysis of a footing (immediate, consolidation and secondary compression)

mod consolidation;
mod engine;
mod load_config;
mod options;
mod results;
mod terzaghi;
pub use crate::settlement::consolidation::*;
pub use crate::settlement::engine::*;
pub use crate::settlement::load_config::*;
pub use crate::settlement::options::*;
pub use crate::settlement::results::*;
pub use crate::settlement::terzaghi::*;
