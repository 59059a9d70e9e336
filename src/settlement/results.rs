use super::{degree_of_consolidation, secondary_compression, time_factor_for_degree, ConsolidationCondition, LoadConfig};
use crate::base::{CptError, SECONDS_PER_YEAR, TV_90, VOID_RATIO_RATE};
use crate::classification::SbtZone;
use serde::{Deserialize, Serialize};

/// Default times (years) of the settlement milestones
pub const DEFAULT_MILESTONES: [f64; 7] = [0.1, 0.5, 1.0, 5.0, 10.0, 25.0, 50.0];

/// Holds the settlement of one layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSettlement {
    pub layer_number: usize,
    pub soil_type: SbtZone,
    pub top_depth: f64,
    pub bottom_depth: f64,
    pub thickness: f64,

    /// Average stress increase Δσ in the layer (kPa)
    pub stress_increase: f64,

    /// Young's modulus used by the immediate settlement (kPa)
    pub youngs_modulus: f64,

    /// Immediate (elastic) settlement (mm)
    pub immediate: f64,

    /// Stress-history branch of the primary consolidation
    pub condition: ConsolidationCondition,

    /// Final primary consolidation settlement (mm); zero for granular layers
    pub consolidation: f64,

    /// Initial effective stress σ'v0 at mid-depth (kPa); zero for granular layers
    pub initial_stress: f64,

    /// Preconsolidation pressure σ'p (kPa); zero for granular layers
    pub preconsolidation_stress: f64,

    /// Initial void ratio e0 from the Ic bands; used by the final consolidation only
    pub void_ratio: f64,

    pub compression_index: f64,
    pub recompression_index: f64,
    pub ocr: f64,

    /// Hydraulic conductivity k (m/s)
    pub permeability: f64,

    /// Coefficient of consolidation cv (m²/s); zero for granular layers
    pub cv: f64,
}

impl LayerSettlement {
    /// Indicates whether the layer has a time-dependent consolidation
    ///
    /// Granular and zero-thickness layers settle instantly.
    pub fn consolidates(&self) -> bool {
        self.condition != ConsolidationCondition::Granular && self.thickness > 0.0 && self.cv > 0.0
    }

    /// Returns the drainage length (double drainage: half thickness)
    pub fn drainage_length(&self) -> f64 {
        self.thickness / 2.0
    }

    /// Returns the time factor Tv at a given time (years)
    pub fn time_factor(&self, time_years: f64) -> f64 {
        let hd = self.drainage_length();
        self.cv * time_years * SECONDS_PER_YEAR / (hd * hd)
    }

    /// Returns the degree of consolidation at a given time (years)
    pub fn degree(&self, time_years: f64) -> f64 {
        if self.consolidates() {
            degree_of_consolidation(self.time_factor(time_years))
        } else {
            1.0
        }
    }

    /// Returns the time (years) to reach a degree of consolidation
    pub fn time_for_degree(&self, degree: f64) -> Result<f64, CptError> {
        let tv = time_factor_for_degree(degree)?;
        if !self.consolidates() {
            return Ok(0.0);
        }
        let hd = self.drainage_length();
        Ok(tv * hd * hd / self.cv / SECONDS_PER_YEAR)
    }

    /// Returns the time (years) to reach 90% of the primary consolidation
    pub fn time_primary(&self) -> f64 {
        if !self.consolidates() {
            return 0.0;
        }
        let hd = self.drainage_length();
        TV_90 * hd * hd / self.cv / SECONDS_PER_YEAR
    }

    /// Returns the immediate plus the time-dependent consolidation settlement (mm)
    pub fn primary_at(&self, time_years: f64) -> f64 {
        self.immediate + self.consolidation * self.degree(time_years)
    }

    /// Returns the secondary compression settlement (mm) for a Cα/Cc ratio
    ///
    /// Uses the fixed void ratio [VOID_RATIO_RATE].
    pub fn secondary_at(&self, c_alpha_ratio: f64, time_years: f64) -> f64 {
        if !self.consolidates() {
            return 0.0;
        }
        secondary_compression(
            c_alpha_ratio,
            self.compression_index,
            VOID_RATIO_RATE,
            self.thickness,
            time_years,
            self.time_primary(),
        )
    }
}

/// Holds the final settlement of a footing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Footing load
    pub load: LoadConfig,

    /// Per-layer results
    pub layers: Vec<LayerSettlement>,

    /// Total immediate settlement (mm)
    pub immediate: f64,

    /// Total primary consolidation settlement (mm)
    pub consolidation: f64,

    /// Immediate plus consolidation settlement (mm)
    pub total: f64,
}

impl SettlementResult {
    /// Allocates a new instance by summing the layer results
    pub fn new(load: LoadConfig, layers: Vec<LayerSettlement>) -> Self {
        let immediate: f64 = layers.iter().map(|l| l.immediate).sum();
        let consolidation: f64 = layers.iter().map(|l| l.consolidation).sum();
        SettlementResult {
            load,
            layers,
            immediate,
            consolidation,
            total: immediate + consolidation,
        }
    }
}

/// Holds the consolidation state of one layer at a given time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerTimeSettlement {
    pub layer_number: usize,

    /// Time factor Tv (None for layers that settle instantly)
    pub time_factor: Option<f64>,

    /// Degree of consolidation U
    pub degree: f64,

    /// Consolidation settlement reached at the time (mm)
    pub consolidation: f64,
}

/// Holds the settlement at a given time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimeSettlement {
    pub time_years: f64,
    pub layers: Vec<LayerTimeSettlement>,

    /// Consolidation settlement reached at the time (mm)
    pub consolidation: f64,

    /// Immediate plus consolidation settlement reached at the time (mm)
    pub total: f64,
}

/// Holds one point of the time-settlement curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub time_years: f64,

    /// Immediate plus time-dependent primary consolidation (mm)
    pub primary: f64,

    /// Primary plus secondary compression (mm)
    pub total: f64,
}

/// Holds a settlement milestone
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Requested time (years)
    pub time_years: f64,

    /// Primary settlement at the nearest curve point (mm)
    pub primary: f64,

    /// Total settlement at the nearest curve point (mm)
    pub total: f64,

    /// Primary settlement as a percentage of immediate plus final consolidation
    pub percent_complete: f64,
}

/// Holds the time-settlement curve
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimeSettlementCurve {
    /// Points sorted by increasing (log-spaced) time
    pub points: Vec<TimePoint>,

    /// Primary settlement (mm) of each layer (outer) at each time (inner)
    pub layer_contributions: Vec<Vec<f64>>,

    /// Total immediate settlement (mm)
    pub immediate: f64,

    /// Total final primary consolidation settlement (mm)
    pub final_consolidation: f64,

    /// Cα/Cc ratio if secondary compression is included
    pub secondary: Option<f64>,
}

impl TimeSettlementCurve {
    /// Returns the point with the time nearest to the given time
    pub fn nearest(&self, time_years: f64) -> Option<&TimePoint> {
        self.points.iter().min_by(|a, b| {
            let da = f64::abs(a.time_years - time_years);
            let db = f64::abs(b.time_years - time_years);
            da.total_cmp(&db)
        })
    }

    /// Returns the last time of the curve
    pub fn max_time(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.time_years)
    }

    /// Returns the settlement milestones at the given times
    ///
    /// Times beyond the end of the curve are skipped.
    pub fn milestones(&self, times: &[f64]) -> Vec<Milestone> {
        let max_time = self.max_time();
        let reference = self.immediate + self.final_consolidation;
        times
            .iter()
            .filter(|t| **t <= max_time)
            .filter_map(|t| {
                self.nearest(*t).map(|point| Milestone {
                    time_years: *t,
                    primary: point.primary,
                    total: point.total,
                    percent_complete: if self.final_consolidation > 0.0 {
                        100.0 * point.primary / reference
                    } else {
                        100.0
                    },
                })
            })
            .collect()
    }
}

/// Holds the time to reach a degree of consolidation in one layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationTime {
    pub layer_number: usize,
    pub soil_type: SbtZone,
    pub thickness: f64,

    /// Hydraulic conductivity k (m/s)
    pub permeability: f64,

    /// Coefficient of consolidation cv (m²/s); None for granular layers
    pub cv: Option<f64>,

    pub time_years: f64,
    pub time_days: f64,
}

/// Holds the times to reach a degree of consolidation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsolidationTimes {
    pub target_degree: f64,
    pub layers: Vec<ConsolidationTime>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
