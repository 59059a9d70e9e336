use super::SoundingAnalysis;
use crate::base::{write_json, CptError};
use crate::classification::{ClassificationMethod, Comparison};
use crate::correlations::LayerParameters;
use crate::cpt::SoundingSummary;
use crate::settlement::{
    ConsolidationTimes, Milestone, SettlementEngine, SettlementResult, TimeSettlementCurve, DEFAULT_MILESTONES,
};
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// Holds the complete results of a sounding and footing analysis
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub name: String,
    pub location: Option<(f64, f64)>,
    pub summary: SoundingSummary,

    /// Correlated parameters of each layer
    pub layers: Vec<LayerParameters>,

    /// Point-by-point comparison of two classification methods
    pub comparison: Comparison,

    /// Final settlement
    pub settlement: SettlementResult,

    /// Time-settlement curve
    pub curve: TimeSettlementCurve,

    /// Settlement at the usual design times (years)
    pub milestones: Vec<Milestone>,

    /// Time to reach the target degree of consolidation
    pub consolidation_times: ConsolidationTimes,
}

impl AnalysisReport {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `analysis` -- the interpreted sounding
    /// * `engine` -- the settlement engine with the footing load and options
    /// * `methods` -- the pair of classification methods to compare
    /// * `target_degree` -- degree of consolidation in (0, 1) for the consolidation times
    pub fn new(
        analysis: &SoundingAnalysis,
        engine: &SettlementEngine,
        methods: (ClassificationMethod, ClassificationMethod),
        target_degree: f64,
    ) -> Result<Self, CptError> {
        let settlement = analysis.settlement(engine);
        let curve = analysis.time_curve(engine);
        let milestones = curve.milestones(&DEFAULT_MILESTONES);
        let consolidation_times = engine.consolidation_times(&analysis.parameters, target_degree)?;
        Ok(AnalysisReport {
            name: analysis.sounding.name.clone(),
            location: analysis.sounding.location,
            summary: analysis.sounding.summary,
            layers: analysis.parameters.clone(),
            comparison: analysis.compare(methods.0, methods.1),
            settlement,
            curve,
            milestones,
            consolidation_times,
        })
    }

    /// Returns the path of the JSON file in the output directory
    pub fn path_json<P>(&self, out_dir: &P) -> String
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(out_dir).join(format!("{}-analysis.json", self.name));
        path.to_string_lossy().to_string()
    }

    /// Writes the report to `<out_dir>/<name>-analysis.json` and returns the path
    pub fn write<P>(&self, out_dir: &P) -> Result<String, CptError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = self.path_json(out_dir);
        write_json(self, &path)?;
        Ok(path)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sounding {}\n", self.name)?;
        write!(f, "{}\n", "=".repeat(9 + self.name.len()))?;
        write!(
            f,
            "depth range = {:.2} to {:.2} m\n",
            self.summary.depth_range.0, self.summary.depth_range.1
        )?;
        write!(f, "average Ic = {:.3}\n", self.summary.avg_ic)?;
        write!(f, "predominant soil = {}\n", self.summary.predominant_soil.label())?;
        write!(
            f,
            "agreement {} vs {} = {:.1}%\n",
            self.comparison.method1, self.comparison.method2, self.comparison.stats.percentage
        )?;
        write!(f, "\nLayers\n======\n")?;
        for p in &self.layers {
            write!(
                f,
                "{:>2} {:6.2} to {:6.2} m  Ic = {:.3}  {}\n",
                p.layer_number,
                p.top_depth,
                p.bottom_depth,
                p.ic,
                p.soil_type.label()
            )?;
        }
        write!(f, "\nSettlement\n==========\n")?;
        write!(f, "immediate = {:.2} mm\n", self.settlement.immediate)?;
        write!(f, "consolidation = {:.2} mm\n", self.settlement.consolidation)?;
        write!(f, "total = {:.2} mm\n", self.settlement.total)?;
        if let (Some(_), Some(last)) = (self.curve.secondary, self.curve.points.last()) {
            write!(
                f,
                "secondary (at {} years) = {:.2} mm\n",
                last.time_years,
                last.total - last.primary
            )?;
        }
        write!(f, "\nMilestones\n==========\n")?;
        for m in &self.milestones {
            write!(
                f,
                "t = {:>5} years: {:8.2} mm ({:.1}%)\n",
                m.time_years, m.total, m.percent_complete
            )?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
