use super::Layer;
use crate::base::{Config, CptError, IC_LAYER_JUMP};
use crate::cpt::Sample;
use tracing::{debug, warn};

/// Splits a sounding into soil layers
///
/// The procedure is a sequence of pure transformations:
///
/// 1. [LayerSegmenter::segment] -- single pass detecting Ic transitions
/// 2. [LayerSegmenter::merge_thin_layers] -- single pass merging thin layers forward
/// 3. [renumber] -- numbers the layers 1, 2, ... from the top
///
/// # Notes
///
/// * A new layer starts at sample `i` when `|Ic[i] - Ic[start]| > 0.3` and
///   `depth[i] - depth[start] ≥ min_layer_thickness`
/// * The bottom of a layer is the top of the next one; the bottom of the last
///   layer is the deepest sample
/// * A thin last layer cannot merge forward and is kept as it is
#[derive(Clone, Copy, Debug)]
pub struct LayerSegmenter {
    /// Minimum thickness of an emitted layer (m)
    pub min_layer_thickness: f64,
}

impl LayerSegmenter {
    /// Allocates a new instance
    pub fn new(min_layer_thickness: f64) -> Result<Self, CptError> {
        if !min_layer_thickness.is_finite() || min_layer_thickness <= 0.0 {
            return Err(CptError::InputValidation("min_layer_thickness must be > 0.0"));
        }
        Ok(LayerSegmenter { min_layer_thickness })
    }

    /// Allocates a new instance from the analysis configuration
    pub fn from_config(config: &Config) -> Result<Self, CptError> {
        LayerSegmenter::new(config.min_layer_thickness)
    }

    /// Detects layer boundaries (layer numbers are not assigned yet)
    pub fn segment(&self, samples: &[Sample]) -> Vec<Layer> {
        let npoint = samples.len();
        if npoint == 0 {
            return Vec::new();
        }
        let mut layers = Vec::new();
        let mut start = 0;
        let mut current_ic = samples[0].ic;
        for i in 1..npoint {
            let jump = f64::abs(samples[i].ic - current_ic);
            let dz = samples[i].depth - samples[start].depth;
            if jump > IC_LAYER_JUMP && dz >= self.min_layer_thickness {
                layers.push(Layer::from_samples(&samples[start..i], samples[i].depth));
                start = i;
                current_ic = samples[i].ic;
            }
        }
        layers.push(Layer::from_samples(&samples[start..], samples[npoint - 1].depth));
        debug!(n_sample = npoint, n_layer = layers.len(), "segmented sounding");
        layers
    }

    /// Merges layers thinner than the minimum with the next layer
    ///
    /// A single left-to-right pass: a thin layer (not the last one) absorbs the
    /// next layer and the scan skips both. The result is renumbered.
    pub fn merge_thin_layers(&self, layers: &[Layer]) -> Vec<Layer> {
        let nlayer = layers.len();
        let mut merged = Vec::with_capacity(nlayer);
        let mut i = 0;
        while i < nlayer {
            let current = &layers[i];
            if current.thickness < self.min_layer_thickness && i < nlayer - 1 {
                merged.push(current.merge(&layers[i + 1]));
                i += 2;
            } else {
                merged.push(*current);
                i += 1;
            }
        }
        if let Some(last) = merged.last() {
            if last.thickness < self.min_layer_thickness {
                warn!(
                    thickness = last.thickness,
                    min = self.min_layer_thickness,
                    "keeping thin last layer"
                );
            }
        }
        debug!(before = nlayer, after = merged.len(), "merged thin layers");
        renumber(merged)
    }

    /// Runs segmentation, merging and numbering
    pub fn process(&self, samples: &[Sample]) -> Vec<Layer> {
        let layers = self.segment(samples);
        self.merge_thin_layers(&layers)
    }
}

/// Assigns the layer numbers 1, 2, ... from the top
pub fn renumber(layers: Vec<Layer>) -> Vec<Layer> {
    layers
        .into_iter()
        .enumerate()
        .map(|(i, layer)| Layer {
            layer_number: i + 1,
            ..layer
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
