use super::Classifier;

const CLAYS_HIGH_FRICTION: &str = "Clays - high friction";
const CLAYS_STANDARD: &str = "Clays - standard";
const CLAYS_SENSITIVE: &str = "Sensitive and cemented clays";
const DRAINED_SANDS: &str = "Drained sands";
const TRANSITIONAL: &str = "Transitional soils";

/// Implements the Schneider et al. (2008) Q–F chart
///
/// Ic is not used. Zones:
///
/// * `2` -- Q > 20 and F < 2: essentially drained sands
/// * `3` -- Q > 10 and F < 4: partially drained transitional soils
/// * `1a`, `1b`, `1c` -- Q < 20 split by F ≥ 2, 1 ≤ F < 2 and F < 1
/// * anything else falls back to transitional soils
///
/// # Reference
///
/// 1. Schneider JA, Randolph MF, Mayne PW, Ramsey NR (2008) Analysis of factors
///    influencing soil classification using normalized piezocone tip resistance
///    and pore pressure parameters, ASCE JGGE, 134(11):1569-1586
pub struct Schneider2008;

impl Classifier for Schneider2008 {
    fn name(&self) -> &'static str {
        "Schneider2008"
    }

    fn classify(&self, qt: f64, fr: f64, _ic: f64) -> &'static str {
        if qt > 20.0 && fr < 2.0 {
            DRAINED_SANDS
        } else if qt > 10.0 && fr < 4.0 {
            TRANSITIONAL
        } else if qt < 20.0 {
            if fr >= 2.0 {
                CLAYS_HIGH_FRICTION
            } else if fr >= 1.0 {
                CLAYS_STANDARD
            } else {
                CLAYS_SENSITIVE
            }
        } else {
            TRANSITIONAL
        }
    }

    fn labels(&self) -> Vec<&'static str> {
        vec![
            CLAYS_HIGH_FRICTION,
            CLAYS_STANDARD,
            CLAYS_SENSITIVE,
            DRAINED_SANDS,
            TRANSITIONAL,
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
