use super::Classifier;
use crate::cpt::Sample;
use serde::Serialize;

/// Holds the labels of two methods at one sample
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ComparisonRecord {
    /// Depth of the sample (m)
    pub depth: f64,

    /// Label assigned by the first method
    pub label1: &'static str,

    /// Label assigned by the second method
    pub label2: &'static str,

    /// Indicates whether both labels are equal
    pub agreement: bool,
}

/// Holds agreement statistics between two methods
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AgreementStats {
    pub total: usize,
    pub agreed: usize,
    pub disagreed: usize,

    /// Percentage of agreed samples (0 if there are no samples)
    pub percentage: f64,
}

impl AgreementStats {
    /// Computes the statistics from comparison records
    pub fn new(records: &[ComparisonRecord]) -> Self {
        let total = records.len();
        let agreed = records.iter().filter(|r| r.agreement).count();
        let percentage = if total > 0 {
            100.0 * (agreed as f64) / (total as f64)
        } else {
            0.0
        };
        AgreementStats {
            total,
            agreed,
            disagreed: total - agreed,
            percentage,
        }
    }
}

/// Holds the result of a comparison
#[derive(Clone, Debug, Serialize)]
pub struct Comparison {
    pub method1: &'static str,
    pub method2: &'static str,
    pub records: Vec<ComparisonRecord>,
    pub stats: AgreementStats,
}

/// Compares two classification methods over a sounding
///
/// The samples are not modified; each record holds derived labels.
pub struct Comparator<'a> {
    first: &'a dyn Classifier,
    second: &'a dyn Classifier,
}

impl<'a> Comparator<'a> {
    /// Allocates a new instance
    pub fn new(first: &'a dyn Classifier, second: &'a dyn Classifier) -> Self {
        Comparator { first, second }
    }

    /// Classifies all samples with both methods
    pub fn compare(&self, samples: &[Sample]) -> Comparison {
        let records: Vec<_> = samples
            .iter()
            .map(|s| {
                let label1 = self.first.classify(s.qt1, s.fr, s.ic);
                let label2 = self.second.classify(s.qt1, s.fr, s.ic);
                ComparisonRecord {
                    depth: s.depth,
                    label1,
                    label2,
                    agreement: label1 == label2,
                }
            })
            .collect();
        let stats = AgreementStats::new(&records);
        Comparison {
            method1: self.first.name(),
            method2: self.second.name(),
            records,
            stats,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
