use super::{Robertson1990, Robertson2009, Schneider2008};
use crate::base::CptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines a CPT-based soil classification chart
///
/// All implementations are pure functions of the normalized parameters.
pub trait Classifier: Send + Sync {
    /// Returns the name of the method (e.g., "Robertson2009")
    fn name(&self) -> &'static str;

    /// Returns the soil label for the normalized parameters
    ///
    /// # Input
    ///
    /// * `qt` -- normalized cone resistance Qt1 = (qt - σvo) / σ'vo
    /// * `fr` -- normalized friction ratio Fr (%)
    /// * `ic` -- soil behavior type index
    fn classify(&self, qt: f64, fr: f64, ic: f64) -> &'static str;

    /// Returns all labels the method may produce
    fn labels(&self) -> Vec<&'static str>;
}

/// Enumerates the available classification methods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationMethod {
    Robertson2009,
    Robertson1990,
    Schneider2008,
}

impl ClassificationMethod {
    /// Returns the chart implementing this method
    pub fn classifier(&self) -> &'static dyn Classifier {
        match self {
            ClassificationMethod::Robertson2009 => &Robertson2009,
            ClassificationMethod::Robertson1990 => &Robertson1990,
            ClassificationMethod::Schneider2008 => &Schneider2008,
        }
    }
}

impl FromStr for ClassificationMethod {
    type Err = CptError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "robertson2009" => Ok(ClassificationMethod::Robertson2009),
            "robertson1990" => Ok(ClassificationMethod::Robertson1990),
            "schneider2008" => Ok(ClassificationMethod::Schneider2008),
            _ => Err(CptError::InputValidation(
                "classification method must be Robertson2009, Robertson1990 or Schneider2008",
            )),
        }
    }
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classifier().name())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
