use super::{Classifier, SbtZone};
use crate::base::{logspace, IC_ZONE_BOUNDARIES};
use serde::{Deserialize, Serialize};

/// Implements the Robertson (2009) chart: soil type from the Ic boundaries only
///
/// # Reference
///
/// 1. Robertson PK (2009) Interpretation of cone penetration tests - a unified approach,
///    Canadian Geotechnical Journal, 46(11):1337-1355
pub struct Robertson2009;

impl Classifier for Robertson2009 {
    fn name(&self) -> &'static str {
        "Robertson2009"
    }

    fn classify(&self, _qt: f64, _fr: f64, ic: f64) -> &'static str {
        SbtZone::from_ic(ic).label()
    }

    fn labels(&self) -> Vec<&'static str> {
        SbtZone::all().iter().map(|z| z.label()).collect()
    }
}

/// Holds one Ic isopleth of the Qt–Fr chart
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IcContour {
    /// The constant Ic value
    pub ic: f64,

    /// Points `(Qt, Fr)`; Fr is None where the isopleth does not exist
    pub points: Vec<(f64, Option<f64>)>,
}

/// Computes the Fr value on the isopleth `ic` at a given Qt
///
/// ```text
/// Fr = 10^(√[Ic² - (3.47 - log₁₀ Qt)²] - 1.22)
/// ```
///
/// Returns None if the discriminant is negative.
pub fn fr_on_isopleth(ic: f64, qt: f64) -> Option<f64> {
    let discriminant = ic * ic - (3.47 - f64::log10(qt)).powi(2);
    if discriminant >= 0.0 {
        Some(f64::powf(10.0, f64::sqrt(discriminant) - 1.22))
    } else {
        None
    }
}

/// Generates the Ic isopleths of the zone boundaries over a log-spaced Qt grid
///
/// # Input
///
/// * `qt_min`, `qt_max` -- range of normalized cone resistance (> 0)
/// * `num_points` -- number of points along each contour
pub fn ic_contours(qt_min: f64, qt_max: f64, num_points: usize) -> Vec<IcContour> {
    let qts = logspace(qt_min, qt_max, num_points);
    IC_ZONE_BOUNDARIES
        .iter()
        .map(|ic| IcContour {
            ic: *ic,
            points: qts.iter().map(|qt| (*qt, fr_on_isopleth(*ic, *qt))).collect(),
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{fr_on_isopleth, ic_contours, Robertson2009};
    use crate::classification::Classifier;
    use crate::cpt::calc_ic;
    use approx::assert_abs_diff_eq;

    #[test]
    fn classify_works() {
        let c = Robertson2009;
        assert_eq!(c.name(), "Robertson2009");
        assert_eq!(c.classify(0.0, 0.0, 1.0), "Gravelly sand to dense sand");
        assert_eq!(c.classify(0.0, 0.0, 1.31), "Sands: clean sand to silty sand");
        assert_eq!(c.classify(0.0, 0.0, 3.7), "Organic soils - clay");
        assert_eq!(c.labels().len(), 6);
    }

    #[test]
    fn fr_on_isopleth_works() {
        // the point must reproduce Ic (without the 0.01 stabilizer)
        let fr = fr_on_isopleth(2.6, 20.0).unwrap();
        assert_abs_diff_eq!(calc_ic(20.0, fr - 0.01), 2.6, epsilon = 1e-12);
        // far away from the chart center
        assert_eq!(fr_on_isopleth(1.31, 1.0), None);
    }

    #[test]
    fn ic_contours_work() {
        let contours = ic_contours(1.0, 1000.0, 50);
        assert_eq!(contours.len(), 5);
        for contour in &contours {
            assert_eq!(contour.points.len(), 50);
            assert_abs_diff_eq!(contour.points[0].0, 1.0, epsilon = 1e-12);
            assert_eq!(contour.points[49].0, 1000.0);
        }
        // the 1.31 isopleth only exists for log10(Qt) ≥ 3.47 - 1.31
        let c131 = &contours[0];
        assert!(c131.points[0].1.is_none());
        assert!(c131.points[49].1.is_some());
        // the 3.60 isopleth exists everywhere in [1, 1000]
        assert!(contours[4].points.iter().all(|p| p.1.is_some()));
    }
}
