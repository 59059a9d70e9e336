//! CPT interpretation, soil layering and foundation settlement analysis
//!
//! The pipeline reads raw cone penetration records (depth, qc, fs, u2), normalizes them
//! with the in-situ stresses, classifies each sample by the soil behaviour type index Ic,
//! groups the samples into layers and correlates the layer parameters needed to
//! estimate the immediate, consolidation and secondary settlement of a footing.

pub mod analysis;
pub mod base;
pub mod classification;
pub mod correlations;
pub mod cpt;
pub mod layering;
pub mod prelude;
pub mod settlement;
