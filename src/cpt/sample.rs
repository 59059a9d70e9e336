use crate::base::CptError;
use crate::classification::SbtZone;
use serde::{Deserialize, Serialize};

/// Holds one raw CPT record as delivered by the file ingestion
///
/// Pressures must use a consistent unit (typically kPa).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Depth below the ground surface (m)
    pub depth: f64,

    /// Measured cone resistance qc
    pub qc: f64,

    /// Sleeve friction fs
    pub fs: f64,

    /// Pore pressure behind the cone u2 (zero if not measured)
    #[serde(default)]
    pub u2: f64,
}

impl RawSample {
    /// Allocates a new instance
    pub fn new(depth: f64, qc: f64, fs: f64, u2: f64) -> Self {
        RawSample { depth, qc, fs, u2 }
    }

    /// Indicates whether all fields are finite numbers
    pub fn is_finite(&self) -> bool {
        self.depth.is_finite() && self.qc.is_finite() && self.fs.is_finite() && self.u2.is_finite()
    }
}

/// Prepares raw records for normalization
///
/// Drops records with non-finite fields, sorts the remaining ones by depth and
/// keeps only the first record (in input order) of each repeated depth.
pub fn prepare_raw_samples(raw: Vec<RawSample>) -> Vec<RawSample> {
    let mut samples: Vec<_> = raw.into_iter().filter(|r| r.is_finite()).collect();
    samples.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    samples.dedup_by(|next, kept| next.depth == kept.depth);
    samples
}

/// Checks that a sequence of raw records forms a valid sounding
///
/// The sequence must be non-empty, finite, with depth ≥ 0 and strictly increasing.
pub fn check_raw_samples(raw: &[RawSample]) -> Result<(), CptError> {
    if raw.is_empty() {
        return Err(CptError::InputValidation("sounding must have at least one sample"));
    }
    if raw.iter().any(|r| !r.is_finite()) {
        return Err(CptError::InputValidation("samples must have finite depth, qc, fs and u2"));
    }
    if raw[0].depth < 0.0 {
        return Err(CptError::InputValidation("depth must be ≥ 0.0"));
    }
    if raw.windows(2).any(|w| w[1].depth <= w[0].depth) {
        return Err(CptError::InputValidation("depths must be strictly increasing"));
    }
    Ok(())
}

/// Holds one normalized CPT record
///
/// # Notation
///
/// * `qt = qc + u2・(1 - a)` -- corrected cone resistance
/// * `qn = qt - σvo` -- net cone resistance
/// * `Qt1 = qn / σ'vo` -- normalized cone resistance (linear)
/// * `Qtn = (qn / Pa)・(Pa / σ'vo)ⁿ` -- normalized cone resistance with stress exponent n
/// * `Fr = 100・fs / qn` -- normalized friction ratio (%)
/// * `Rf` -- friction ratio (%), computed with the same expression as Fr
/// * `Bq = (u2 - u0) / qn` -- pore pressure ratio
/// * `Ic` -- soil behavior type index
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub depth: f64,
    pub qc: f64,
    pub fs: f64,
    pub u2: f64,
    pub sigma_vo: f64,
    pub sigma_vo_prime: f64,
    pub u0: f64,
    pub qt: f64,
    pub qn: f64,
    pub qt1: f64,
    pub qtn: f64,
    pub n_exponent: f64,
    pub fr: f64,
    pub rf: f64,
    pub bq: f64,
    pub ic: f64,
    pub soil_type: SbtZone,
}

impl Sample {
    /// Returns the raw record this sample was derived from
    pub fn raw(&self) -> RawSample {
        RawSample::new(self.depth, self.qc, self.fs, self.u2)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
