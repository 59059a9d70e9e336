//! Makes available common structures needed to run an analysis
//!
//! You may write `use cptsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analysis::{analyze_batch, AnalysisReport, SoundingAnalysis, SoundingInput};
pub use crate::base::{Config, CptError, Samples, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::classification::{ClassificationMethod, Classifier, Comparator, SbtZone};
pub use crate::correlations::LayerParameters;
pub use crate::cpt::{RawSample, Sample, Sounding};
pub use crate::layering::{Layer, LayerSegmenter};
pub use crate::settlement::{LoadConfig, SettlementEngine, SettlementOptions, SettlementResult, TimeSettlementCurve};
