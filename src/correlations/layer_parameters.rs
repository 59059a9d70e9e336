use super::{
    compression_index, constrained_modulus, friction_angle, ocr, permeability, recompression_index,
    undrained_shear_strength, unit_weight, youngs_modulus,
};
use crate::base::IC_CLAY_LIKE;
use crate::classification::SbtZone;
use crate::layering::Layer;
use serde::{Deserialize, Serialize};

/// Holds the settlement-relevant soil parameters of one layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerParameters {
    /// Number of the source layer
    pub layer_number: usize,

    /// Soil behavior type of the source layer
    pub soil_type: SbtZone,

    /// Depth of the top of the source layer (m)
    pub top_depth: f64,

    /// Depth of the bottom of the source layer (m)
    pub bottom_depth: f64,

    /// Thickness of the source layer (m)
    pub thickness: f64,

    /// Mean soil behavior type index of the source layer
    pub ic: f64,

    /// Peak friction angle φ' (degrees); zero for clay-like soils
    pub friction_angle: f64,

    /// Undrained shear strength Su (kPa); zero for sand-like soils
    pub undrained_shear_strength: f64,

    /// Young's modulus E (kPa)
    pub youngs_modulus: f64,

    /// Constrained modulus M (kPa)
    pub constrained_modulus: f64,

    /// Compression index Cc
    pub compression_index: f64,

    /// Recompression index Cr
    pub recompression_index: f64,

    /// Overconsolidation ratio
    pub ocr: f64,

    /// Hydraulic conductivity k (m/s)
    pub permeability: f64,

    /// Bulk unit weight γ (kN/m³)
    pub unit_weight: f64,
}

impl LayerParameters {
    /// Derives the parameters from the mean values of a layer
    ///
    /// The stresses are the layer means of σvo and σ'vo. The friction angle and the
    /// constrained modulus use the layer mean of Qt1 (normalized with n = 1).
    pub fn derive(layer: &Layer) -> Self {
        let (qt, ic) = (layer.qt, layer.ic);
        let cc = compression_index(ic, qt);
        LayerParameters {
            layer_number: layer.layer_number,
            soil_type: layer.soil_type,
            top_depth: layer.top_depth,
            bottom_depth: layer.bottom_depth,
            thickness: layer.thickness,
            ic,
            friction_angle: friction_angle(layer.qt1, ic),
            undrained_shear_strength: undrained_shear_strength(qt, layer.sigma_vo, ic),
            youngs_modulus: youngs_modulus(qt, layer.sigma_vo, ic),
            constrained_modulus: constrained_modulus(qt, layer.qt1),
            compression_index: cc,
            recompression_index: recompression_index(cc, ic),
            ocr: ocr(qt, layer.sigma_vo, layer.sigma_vo_prime, ic),
            permeability: permeability(ic),
            unit_weight: unit_weight(qt, ic),
        }
    }

    /// Derives the parameters of all layers
    pub fn derive_all(layers: &[Layer]) -> Vec<Self> {
        layers.iter().map(LayerParameters::derive).collect()
    }

    /// Returns the depth of the middle of the layer
    pub fn mid_depth(&self) -> f64 {
        self.top_depth + self.thickness / 2.0
    }

    /// Indicates whether the layer consolidates (clay-like behavior, Ic ≥ 2.6)
    pub fn is_clay_like(&self) -> bool {
        self.ic >= IC_CLAY_LIKE
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
