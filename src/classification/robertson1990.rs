use super::Classifier;

const SENSITIVE: &str = "Sensitive fine-grained";
const CLAY_ORGANIC: &str = "Clay - organic soil";
const CLAY_SILTY: &str = "Clay to silty clay";
const SILT_MIXTURES: &str = "Silt mixtures - clayey silt to silty clay";
const SAND_MIXTURES: &str = "Sand mixtures - silty sand to sandy silt";
const SANDS: &str = "Sands - clean sand to silty sand";
const DENSE_SAND: &str = "Dense sand to gravelly sand";
const STIFF_SAND: &str = "Stiff sand to clayey sand";
const STIFF_FINE: &str = "Stiff fine-grained";

/// Normalized resistance above which mid-Ic soils are stiff (overconsolidated)
const QT_STIFF: f64 = 50.0;

/// Normalized resistance above which low-Ic soils are dense
const QT_DENSE: f64 = 100.0;

/// Implements the Robertson (1990) normalized chart
///
/// Same Ic bands as Robertson (2009), with Qt overrides for the stiff zones 8 and 9
/// (Qt > 50 with 1.31 ≤ Ic < 2.60) and the dense sand zone 7 (Qt > 100 with Ic < 1.31).
///
/// # Reference
///
/// 1. Robertson PK (1990) Soil classification using the cone penetration test,
///    Canadian Geotechnical Journal, 27(1):151-158
pub struct Robertson1990;

impl Classifier for Robertson1990 {
    fn name(&self) -> &'static str {
        "Robertson1990"
    }

    fn classify(&self, qt: f64, _fr: f64, ic: f64) -> &'static str {
        if ic >= 3.60 {
            SENSITIVE
        } else if ic >= 2.95 {
            CLAY_ORGANIC
        } else if ic >= 2.60 {
            CLAY_SILTY
        } else if ic >= 2.05 {
            if qt > QT_STIFF {
                STIFF_FINE
            } else {
                SILT_MIXTURES
            }
        } else if ic >= 1.31 {
            if qt > QT_STIFF {
                STIFF_SAND
            } else {
                SAND_MIXTURES
            }
        } else if qt > QT_DENSE {
            DENSE_SAND
        } else {
            SANDS
        }
    }

    fn labels(&self) -> Vec<&'static str> {
        vec![
            SENSITIVE,
            CLAY_ORGANIC,
            CLAY_SILTY,
            SILT_MIXTURES,
            SAND_MIXTURES,
            SANDS,
            DENSE_SAND,
            STIFF_SAND,
            STIFF_FINE,
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
