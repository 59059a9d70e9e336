//! Implements the automatic segmentation of soundings into soil layers

mod layer;
mod segmenter;
pub use crate::layering::layer::*;
pub use crate::layering::segmenter::*;

#[cfg(test)]
pub(crate) mod testing;
