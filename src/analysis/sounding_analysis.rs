use crate::base::{read_json, Config, CptError};
use crate::classification::{ClassificationMethod, Comparator, Comparison};
use crate::correlations::LayerParameters;
use crate::cpt::{prepare_raw_samples, RawSample, Sounding};
use crate::layering::{Layer, LayerSegmenter};
use crate::settlement::{SettlementEngine, SettlementResult, TimeSettlementCurve};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use tracing::info;

/// Holds the raw data of one sounding as read from a JSON file
///
/// ```text
/// {"name": "CPT-01", "location": [10.0, 5.0], "samples": [{"depth": 0.5, "qc": 1500.0, "fs": 20.0, "u2": 55.0}]}
/// ```
///
/// `location` and `u2` are optional.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SoundingInput {
    pub name: String,

    #[serde(default)]
    pub location: Option<(f64, f64)>,

    pub samples: Vec<RawSample>,
}

impl SoundingInput {
    /// Allocates a new instance
    pub fn new(name: &str, samples: Vec<RawSample>) -> Self {
        SoundingInput {
            name: name.to_string(),
            location: None,
            samples,
        }
    }

    /// Reads a JSON file
    pub fn read<P>(full_path: &P) -> Result<Self, CptError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        read_json(full_path)
    }
}

/// Runs the CPT interpretation pipeline of one sounding
///
/// raw samples → normalized sounding → layers → layer parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SoundingAnalysis {
    /// Normalized sounding
    pub sounding: Sounding,

    /// Soil layers from the top
    pub layers: Vec<Layer>,

    /// Correlated parameters of each layer
    pub parameters: Vec<LayerParameters>,
}

impl SoundingAnalysis {
    /// Allocates a new instance and runs the pipeline
    ///
    /// The raw records must be sorted by strictly increasing depth.
    pub fn new(name: &str, raw: &[RawSample], config: &Config) -> Result<Self, CptError> {
        let sounding = Sounding::new(name, raw, config)?;
        let segmenter = LayerSegmenter::from_config(config)?;
        let layers = segmenter.process(&sounding.samples);
        let parameters = LayerParameters::derive_all(&layers);
        info!(
            sounding = name,
            n_sample = sounding.samples.len(),
            n_layer = layers.len(),
            "analyzed sounding"
        );
        Ok(SoundingAnalysis {
            sounding,
            layers,
            parameters,
        })
    }

    /// Allocates a new instance from (unprepared) input data
    ///
    /// Records with non-finite values are dropped, the remaining ones are sorted by depth and
    /// only the first record of a repeated depth is kept.
    pub fn from_input(input: &SoundingInput, config: &Config) -> Result<Self, CptError> {
        let raw = prepare_raw_samples(input.samples.clone());
        let mut analysis = SoundingAnalysis::new(&input.name, &raw, config)?;
        if let Some((x, y)) = input.location {
            analysis.sounding.set_location(x, y);
        }
        Ok(analysis)
    }

    /// Returns the layer parameters of the clay-like layers
    pub fn clay_layers(&self) -> Vec<&LayerParameters> {
        self.parameters.iter().filter(|p| p.is_clay_like()).collect()
    }

    /// Compares two classification methods over the sounding
    pub fn compare(&self, method1: ClassificationMethod, method2: ClassificationMethod) -> Comparison {
        Comparator::new(method1.classifier(), method2.classifier()).compare(&self.sounding.samples)
    }

    /// Calculates the final settlement of a footing over the layers
    pub fn settlement(&self, engine: &SettlementEngine) -> SettlementResult {
        engine.calculate(&self.parameters)
    }

    /// Generates the time-settlement curve of a footing over the layers
    pub fn time_curve(&self, engine: &SettlementEngine) -> TimeSettlementCurve {
        engine.time_curve(&self.parameters)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{SoundingAnalysis, SoundingInput};
    use crate::base::{Config, CptError, Samples};
    use crate::classification::{ClassificationMethod, SbtZone};
    use crate::cpt::RawSample;

    #[test]
    fn new_works() -> Result<(), CptError> {
        let analysis = SoundingAnalysis::new("SC", &Samples::raw_sand_over_clay(), &Config::new())?;
        assert_eq!(analysis.sounding.samples.len(), 40);
        assert_eq!(analysis.layers.len(), 4);
        assert_eq!(analysis.parameters.len(), 4);
        assert_eq!(analysis.layers[0].top_depth, 0.25);
        assert_eq!(analysis.layers[1].bottom_depth, 4.0);
        assert_eq!(analysis.layers[2].top_depth, 4.0);
        assert_eq!(analysis.layers[3].bottom_depth, 10.0);
        assert!(analysis.layers[0].soil_type.is_sand_like());
        assert!(analysis.layers[1].soil_type.is_sand_like());
        assert_eq!(analysis.layers[2].soil_type, SbtZone::Clays);
        let clays = analysis.clay_layers();
        assert_eq!(clays.len(), 2);
        assert_eq!(clays[0].layer_number, 3);
        assert_eq!(clays[1].layer_number, 4);
        Ok(())
    }

    #[test]
    fn new_captures_errors() {
        let res = SoundingAnalysis::new("EMPTY", &[], &Config::new());
        assert_eq!(
            res.err().unwrap().validation_message(),
            Some("sounding must have at least one sample")
        );
        let mut config = Config::new();
        config.min_layer_thickness = 0.0;
        let res = SoundingAnalysis::new("A", &Samples::raw_sand_over_clay(), &config);
        assert_eq!(
            res.err().unwrap().validation_message(),
            Some("min_layer_thickness must be > 0.0")
        );
    }

    #[test]
    fn from_input_works() -> Result<(), CptError> {
        let json = r#"{
            "name": "CPT-X",
            "location": [10.0, 5.0],
            "samples": [
                {"depth": 2.0, "qc": 900.0, "fs": 30.0},
                {"depth": 1.0, "qc": 8000.0, "fs": 40.0, "u2": 10.0}
            ]
        }"#;
        let input: SoundingInput = serde_json::from_str(json)?;
        let analysis = SoundingAnalysis::from_input(&input, &Config::new())?;
        assert_eq!(analysis.sounding.name, "CPT-X");
        assert_eq!(analysis.sounding.location, Some((10.0, 5.0)));
        assert_eq!(analysis.sounding.depths(), &[1.0, 2.0]);
        assert_eq!(analysis.sounding.samples[0].u2, 10.0);
        assert_eq!(analysis.sounding.samples[1].u2, 0.0);
        Ok(())
    }

    #[test]
    fn compare_works() -> Result<(), CptError> {
        let raw: Vec<_> = (1..=4).map(|i| RawSample::new(i as f64, 5000.0, 20.0, 0.0)).collect();
        let analysis = SoundingAnalysis::new("C", &raw, &Config::new())?;
        let comparison = analysis.compare(ClassificationMethod::Robertson2009, ClassificationMethod::Robertson2009);
        assert_eq!(comparison.stats.percentage, 100.0);
        assert_eq!(comparison.records.len(), 4);
        assert_eq!(analysis.sounding.summary.predominant_soil, analysis.sounding.samples[0].soil_type);
        assert_ne!(analysis.sounding.summary.predominant_soil, SbtZone::OrganicClay);
        Ok(())
    }
}
