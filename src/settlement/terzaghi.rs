use crate::base::{CptError, TV_50};
use std::f64::consts::PI;

/// Calculates the average degree of consolidation U from the time factor Tv
///
/// Uses the usual two-branch approximation of the Terzaghi series solution:
///
/// ```text
/// U = sqrt(4 Tv / π)                   if Tv < 0.217
/// U = 1 - (8 / π²) exp(-π² Tv / 4)     otherwise
/// ```
///
/// The result is in [0, 1].
///
/// # Reference
///
/// 1. Terzaghi K (1943) Theoretical Soil Mechanics, Wiley, New York
pub fn degree_of_consolidation(tv: f64) -> f64 {
    if !(tv > 0.0) {
        return 0.0;
    }
    let u = if tv < 0.217 {
        f64::sqrt(4.0 * tv / PI)
    } else {
        1.0 - (8.0 / (PI * PI)) * f64::exp(-PI * PI * tv / 4.0)
    };
    f64::min(u, 1.0)
}

/// Calculates the time factor Tv required to reach a degree of consolidation U
///
/// ```text
/// Tv = (π / 4) U²             if U < 0.5
/// Tv = 0.197                  if 0.5 ≤ U < 0.6
/// Tv = -0.933 log10(1 - U)    otherwise
/// ```
///
/// The result is non-decreasing in U. For instance, `Tv(0.9) = 0.933`.
///
/// # Input
///
/// * `degree` -- target degree of consolidation in (0, 1)
pub fn time_factor_for_degree(degree: f64) -> Result<f64, CptError> {
    if !(degree > 0.0 && degree < 1.0) {
        return Err(CptError::InputValidation("target degree must be in (0.0, 1.0)"));
    }
    if degree < 0.5 {
        Ok(PI / 4.0 * degree * degree)
    } else if degree < 0.6 {
        Ok(TV_50)
    } else {
        Ok(-0.933 * f64::log10(1.0 - degree))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
