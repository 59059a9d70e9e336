use crate::base::{GAMMA_WATER, SIGMA_VO_PRIME_MIN};

/// Holds the in-situ (geostatic) stress state at one depth
///
/// All values in kPa; compression is positive (geotechnical convention).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InSituStress {
    /// Total vertical overburden stress σvo
    pub sigma_vo: f64,

    /// Hydrostatic (equilibrium) pore pressure u0
    pub u0: f64,

    /// Effective vertical overburden stress σ'vo (floored at 1.0)
    pub sigma_vo_prime: f64,
}

/// Computes total and effective overburden stresses in a uniform soil column
///
/// # Notes
///
/// * The unit weight γ is constant with depth
/// * The pore pressure is hydrostatic below the water table and zero above it
/// * σ'vo is floored at [SIGMA_VO_PRIME_MIN] so it can safely divide other quantities
#[derive(Clone, Copy, Debug)]
pub struct StressModel {
    /// Unit weight of the soil γ (kN/m³)
    pub gamma_soil: f64,

    /// Depth of the water table (m)
    pub water_table_depth: f64,
}

impl StressModel {
    /// Allocates a new instance
    pub fn new(gamma_soil: f64, water_table_depth: f64) -> Self {
        StressModel {
            gamma_soil,
            water_table_depth,
        }
    }

    /// Returns the hydrostatic pore pressure u0 at a given depth
    pub fn pore_pressure(&self, depth: f64) -> f64 {
        GAMMA_WATER * f64::max(0.0, depth - self.water_table_depth)
    }

    /// Calculates the stress state at a given depth
    pub fn calc(&self, depth: f64) -> InSituStress {
        let sigma_vo = self.gamma_soil * depth;
        let u0 = self.pore_pressure(depth);
        InSituStress {
            sigma_vo,
            u0,
            sigma_vo_prime: f64::max(sigma_vo - u0, SIGMA_VO_PRIME_MIN),
        }
    }

    /// Returns `(σvo, σ'vo)` at a given depth
    pub fn stresses(&self, depth: f64) -> (f64, f64) {
        let s = self.calc(depth);
        (s.sigma_vo, s.sigma_vo_prime)
    }

    /// Returns `(σvo, σ'vo)` for an array of depths
    pub fn stresses_vec(&self, depths: &[f64]) -> (Vec<f64>, Vec<f64>) {
        depths.iter().map(|d| self.stresses(*d)).unzip()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
