use crate::base::{mean, mode_by_key};
use crate::classification::SbtZone;
use crate::cpt::Sample;
use serde::{Deserialize, Serialize};

/// Holds a soil layer: a contiguous depth interval of a sounding
///
/// All quantities except the depths and thickness are mean values over the
/// member samples (or thickness-weighted means after merging).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Number of the layer from the top (1-based; zero before renumbering)
    pub layer_number: usize,

    /// Depth of the top of the layer (m)
    pub top_depth: f64,

    /// Depth of the bottom of the layer (m)
    pub bottom_depth: f64,

    /// Thickness `bottom_depth - top_depth` (m)
    pub thickness: f64,

    pub qc: f64,
    pub qt: f64,
    pub fs: f64,
    pub ic: f64,

    /// Mean normalized cone resistance Qt1
    pub qt1: f64,

    /// Mean normalized cone resistance Qtn (with stress exponent)
    pub qtn: f64,

    pub fr: f64,
    pub rf: f64,
    pub sigma_vo: f64,
    pub sigma_vo_prime: f64,

    /// Representative soil behavior type (mode over the samples; ties go to the smallest label)
    pub soil_type: SbtZone,
}

impl Layer {
    /// Creates a layer from member samples
    ///
    /// # Input
    ///
    /// * `samples` -- non-empty slice of samples sorted by depth
    /// * `bottom_depth` -- depth of the bottom of the layer; i.e., the depth of the
    ///   first sample of the next layer or the last depth of the sounding
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    pub fn from_samples(samples: &[Sample], bottom_depth: f64) -> Self {
        assert!(!samples.is_empty());
        let top_depth = samples[0].depth;
        let avg = |f: fn(&Sample) -> f64| mean(samples.iter().map(f));
        Layer {
            layer_number: 0,
            top_depth,
            bottom_depth,
            thickness: bottom_depth - top_depth,
            qc: avg(|s| s.qc),
            qt: avg(|s| s.qt),
            fs: avg(|s| s.fs),
            ic: avg(|s| s.ic),
            qt1: avg(|s| s.qt1),
            qtn: avg(|s| s.qtn),
            fr: avg(|s| s.fr),
            rf: avg(|s| s.rf),
            sigma_vo: avg(|s| s.sigma_vo),
            sigma_vo_prime: avg(|s| s.sigma_vo_prime),
            soil_type: mode_by_key(samples.iter().map(|s| s.soil_type), |z| z.label()).unwrap_or(samples[0].soil_type),
        }
    }

    /// Merges this layer with the next one using thickness-weighted means
    ///
    /// The merged layer keeps the number and soil type of this (upper) layer.
    /// Two zero-thickness layers are merged with equal weights.
    pub fn merge(&self, next: &Layer) -> Layer {
        let total = self.thickness + next.thickness;
        let (w1, w2, den) = if total > 0.0 {
            (self.thickness, next.thickness, total)
        } else {
            (1.0, 1.0, 2.0)
        };
        let avg = |a: f64, b: f64| (w1 * a + w2 * b) / den;
        Layer {
            layer_number: self.layer_number,
            top_depth: self.top_depth,
            bottom_depth: next.bottom_depth,
            thickness: total,
            qc: avg(self.qc, next.qc),
            qt: avg(self.qt, next.qt),
            fs: avg(self.fs, next.fs),
            ic: avg(self.ic, next.ic),
            qt1: avg(self.qt1, next.qt1),
            qtn: avg(self.qtn, next.qtn),
            fr: avg(self.fr, next.fr),
            rf: avg(self.rf, next.rf),
            sigma_vo: avg(self.sigma_vo, next.sigma_vo),
            sigma_vo_prime: avg(self.sigma_vo_prime, next.sigma_vo_prime),
            soil_type: self.soil_type,
        }
    }

    /// Returns the depth of the middle of the layer
    pub fn mid_depth(&self) -> f64 {
        self.top_depth + self.thickness / 2.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Layer;
    use crate::classification::SbtZone;
    use crate::layering::testing::{sample_with_ic, samples_with_ic};

    #[test]
    fn from_samples_works() {
        let samples = [
            sample_with_ic(1.0, 3.0, 100.0),
            sample_with_ic(1.5, 3.1, 200.0),
            sample_with_ic(2.0, 1.5, 300.0),
        ];
        let layer = Layer::from_samples(&samples, 2.5);
        assert_eq!(layer.layer_number, 0);
        assert_eq!(layer.top_depth, 1.0);
        assert_eq!(layer.bottom_depth, 2.5);
        assert_eq!(layer.thickness, 1.5);
        assert_eq!(layer.qc, 200.0);
        assert_eq!(layer.soil_type, SbtZone::Clays);
        assert_eq!(layer.mid_depth(), 1.75);
    }

    #[test]
    fn from_samples_breaks_soil_type_ties_by_label() {
        let samples = samples_with_ic(1.0, 0.5, &[1.5, 1.5, 3.0, 3.0]);
        assert_eq!(samples[0].soil_type, SbtZone::CleanToSiltySand);
        let layer = Layer::from_samples(&samples, 3.0);
        assert_eq!(layer.soil_type, SbtZone::Clays);

        let samples = samples_with_ic(1.0, 0.5, &[3.0, 1.5, 1.5]);
        let layer = Layer::from_samples(&samples, 2.5);
        assert_eq!(layer.soil_type, SbtZone::CleanToSiltySand);
    }

    #[test]
    fn merge_works() {
        let mut upper = Layer::from_samples(&[sample_with_ic(0.0, 3.0, 100.0)], 2.0);
        upper.layer_number = 1;
        let lower = Layer::from_samples(&[sample_with_ic(2.0, 1.5, 400.0)], 3.0);
        let merged = upper.merge(&lower);
        assert_eq!(merged.layer_number, 1);
        assert_eq!(merged.top_depth, 0.0);
        assert_eq!(merged.bottom_depth, 3.0);
        assert_eq!(merged.thickness, 3.0);
        assert_eq!(merged.qc, 200.0);
        assert_eq!(merged.ic, 2.5);
        assert_eq!(merged.soil_type, SbtZone::Clays);
    }

    #[test]
    fn merge_handles_zero_thickness() {
        let a = Layer::from_samples(&[sample_with_ic(1.0, 2.0, 100.0)], 1.0);
        let b = Layer::from_samples(&[sample_with_ic(1.0, 3.0, 300.0)], 1.0);
        let merged = a.merge(&b);
        assert_eq!(merged.thickness, 0.0);
        assert_eq!(merged.qc, 200.0);
    }
}
