use crate::base::GAMMA_WATER;
use serde::{Deserialize, Serialize};
use std::f64::consts::LN_10;
use std::fmt;

/// Defines the stress-history branch of the primary consolidation of a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsolidationCondition {
    /// Sand-like layer without consolidation settlement
    Granular,

    /// The final stress stays below the preconsolidation pressure (recompression only)
    Overconsolidated,

    /// The final stress crosses the preconsolidation pressure (recompression + virgin compression)
    OverToNormallyConsolidated,

    /// The initial stress is at or above the preconsolidation pressure (virgin compression only)
    NormallyConsolidated,
}

impl fmt::Display for ConsolidationCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConsolidationCondition::Granular => "Granular soil - no consolidation settlement",
            ConsolidationCondition::Overconsolidated => "Overconsolidated (recompression only)",
            ConsolidationCondition::OverToNormallyConsolidated => "Overconsolidated to normally consolidated",
            ConsolidationCondition::NormallyConsolidated => "Normally consolidated",
        };
        write!(f, "{}", text)
    }
}

/// Estimates the initial void ratio e0 from Ic
///
/// Returns 1.0 (soft clay) if Ic > 3.5, 0.8 (medium clay) if Ic > 3.0, and 0.6 otherwise.
pub fn void_ratio(ic: f64) -> f64 {
    if ic > 3.5 {
        1.0
    } else if ic > 3.0 {
        0.8
    } else {
        0.6
    }
}

/// Holds the data of a one-dimensional compression problem
#[derive(Clone, Copy, Debug)]
pub struct Compression {
    /// Compression index Cc
    pub cc: f64,

    /// Recompression index Cr
    pub cr: f64,

    /// Initial void ratio e0
    pub e0: f64,

    /// Thickness of the layer H (m)
    pub thickness: f64,

    /// Initial effective vertical stress σ'v0 (kPa; > 0)
    pub sigma_ini: f64,

    /// Stress increase Δσ (kPa; ≥ 0)
    pub delta_sigma: f64,

    /// Preconsolidation pressure σ'p (kPa)
    pub sigma_pre: f64,
}

impl Compression {
    /// Calculates the primary consolidation settlement (mm) and the stress-history branch
    ///
    /// ```text
    /// σ'v0 + Δσ ≤ σ'p:     Sc = Cr H/(1+e0) log10((σ'v0+Δσ)/σ'v0)
    /// σ'v0 < σ'p < σ'v0+Δσ: Sc = Cr H/(1+e0) log10(σ'p/σ'v0) + Cc H/(1+e0) log10((σ'v0+Δσ)/σ'p)
    /// otherwise:            Sc = Cc H/(1+e0) log10((σ'v0+Δσ)/σ'v0)
    /// ```
    pub fn settlement(&self) -> (f64, ConsolidationCondition) {
        let h_e = self.thickness / (1.0 + self.e0);
        let sigma_fin = self.sigma_ini + self.delta_sigma;
        let (sc, condition) = if sigma_fin <= self.sigma_pre {
            (
                self.cr * h_e * f64::log10(sigma_fin / self.sigma_ini),
                ConsolidationCondition::Overconsolidated,
            )
        } else if self.sigma_ini < self.sigma_pre {
            let recompression = self.cr * h_e * f64::log10(self.sigma_pre / self.sigma_ini);
            let virgin = self.cc * h_e * f64::log10(sigma_fin / self.sigma_pre);
            (
                recompression + virgin,
                ConsolidationCondition::OverToNormallyConsolidated,
            )
        } else {
            (
                self.cc * h_e * f64::log10(sigma_fin / self.sigma_ini),
                ConsolidationCondition::NormallyConsolidated,
            )
        };
        (sc * 1000.0, condition)
    }
}

/// Calculates the coefficient of volume compressibility mv (m²/kN)
///
/// Uses `mv = Cc / ((1 + e0) σ'v0 ln(10))`.
pub fn volume_compressibility(cc: f64, e0: f64, sigma_ini: f64) -> f64 {
    cc / ((1.0 + e0) * sigma_ini * LN_10)
}

/// Calculates the coefficient of consolidation cv = k / (γw mv) (m²/s)
pub fn consolidation_coefficient(permeability: f64, mv: f64) -> f64 {
    permeability / (GAMMA_WATER * mv)
}

/// Calculates the secondary compression settlement (mm)
///
/// Returns `Cα H/(1+e0) log10(t/tp)` with `Cα = ratio · Cc` if `t > tp`; zero otherwise.
pub fn secondary_compression(ratio: f64, cc: f64, e0: f64, thickness: f64, time: f64, time_primary: f64) -> f64 {
    if !(time > time_primary && time_primary > 0.0) {
        return 0.0;
    }
    let c_alpha = ratio * cc;
    c_alpha * thickness / (1.0 + e0) * f64::log10(time / time_primary) * 1000.0
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
