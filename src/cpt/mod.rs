//! Implements the normalization of Cone Penetration Test (CPT) soundings

mod normalizer;
mod sample;
mod sounding;
mod stress;
pub use crate::cpt::normalizer::*;
pub use crate::cpt::sample::*;
pub use crate::cpt::sounding::*;
pub use crate::cpt::stress::*;
