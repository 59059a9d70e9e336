use super::{SoundingAnalysis, SoundingInput};
use crate::base::{Config, CptError};
use rayon::prelude::*;
use tracing::info;

/// Analyzes many soundings in parallel
///
/// The soundings are independent; the results keep the input order.
/// Returns the first error found, if any.
pub fn analyze_batch(inputs: &[SoundingInput], config: &Config) -> Result<Vec<SoundingAnalysis>, CptError> {
    config.validate()?;
    let results: Result<Vec<_>, _> = inputs
        .par_iter()
        .map(|input| SoundingAnalysis::from_input(input, config))
        .collect();
    info!(n_sounding = inputs.len(), "analyzed batch of soundings");
    results
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
