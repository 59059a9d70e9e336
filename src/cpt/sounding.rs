use super::{check_raw_samples, CptNormalizer, RawSample, Sample};
use crate::base::{mean, mode_by_key, Config, CptError};
use crate::classification::SbtZone;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Holds summary statistics of a sounding
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoundingSummary {
    /// Minimum and maximum depth (m)
    pub depth_range: (f64, f64),

    /// Minimum and maximum cone resistance qc
    pub qc_range: (f64, f64),

    /// Mean cone resistance qc
    pub avg_qc: f64,

    /// Mean soil behavior type index
    pub avg_ic: f64,

    /// Most frequent soil behavior type; ties go to the smallest label
    pub predominant_soil: SbtZone,
}

impl SoundingSummary {
    /// Computes the summary of a non-empty sequence of samples
    pub fn new(samples: &[Sample]) -> Result<Self, CptError> {
        let predominant_soil = match mode_by_key(samples.iter().map(|s| s.soil_type), |z| z.label()) {
            Some(zone) => zone,
            None => return Err(CptError::InputValidation("sounding must have at least one sample")),
        };
        let min_max = |f: fn(&Sample) -> f64| {
            samples
                .iter()
                .map(f)
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
        };
        Ok(SoundingSummary {
            depth_range: min_max(|s| s.depth),
            qc_range: min_max(|s| s.qc),
            avg_qc: mean(samples.iter().map(|s| s.qc)),
            avg_ic: mean(samples.iter().map(|s| s.ic)),
            predominant_soil,
        })
    }
}

/// Holds the normalized samples of one physical CPT location
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sounding {
    /// Identification of the CPT
    pub name: String,

    /// Optional plan coordinates `(x, y)`; only used by spatial visualization
    pub location: Option<(f64, f64)>,

    /// Normalized samples sorted by increasing depth
    pub samples: Vec<Sample>,

    /// Summary statistics
    pub summary: SoundingSummary,
}

impl Sounding {
    /// Allocates a new instance by normalizing the raw records
    ///
    /// The raw records must be sorted by strictly increasing depth
    /// (see [crate::cpt::prepare_raw_samples]).
    pub fn new(name: &str, raw: &[RawSample], config: &Config) -> Result<Self, CptError> {
        config.validate()?;
        check_raw_samples(raw)?;
        let samples = CptNormalizer::from_config(config).normalize(raw);
        debug!(sounding = name, n_sample = samples.len(), "normalized CPT samples");
        let summary = SoundingSummary::new(&samples)?;
        Ok(Sounding {
            name: name.to_string(),
            location: None,
            samples,
            summary,
        })
    }

    /// Sets the plan coordinates
    pub fn set_location(&mut self, x: f64, y: f64) -> &mut Self {
        self.location = Some((x, y));
        self
    }

    /// Returns the depths of all samples
    pub fn depths(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.depth).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
