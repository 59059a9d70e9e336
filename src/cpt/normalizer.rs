use super::{RawSample, Sample, StressModel};
use crate::base::{Config, IC_CLAY_LIKE, IC_FR_OFFSET, IC_ITERATIONS, LOG_ARG_MIN, PA_ATM};
use crate::classification::SbtZone;

/// Replaces ±∞ and NaN by zero
///
/// Ratios divided by the net cone resistance are not fatal when qn ≈ 0;
/// they are reported as zero instead.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Computes the normalized cone resistance `Qtn = (qn/Pa)・(Pa/σ'vo)ⁿ`
pub fn calc_qtn(qn: f64, sigma_vo_prime: f64, n: f64) -> f64 {
    (qn / PA_ATM) * f64::powf(PA_ATM / sigma_vo_prime, n)
}

/// Computes the soil behavior type index from Qtn and Fr
///
/// ```text
/// Ic = √[(3.47 - log₁₀ Qtn)² + (log₁₀(Fr + 0.01) + 1.22)²]
/// ```
///
/// The `+ 0.01` offset keeps log₁₀ away from zero friction ratios.
/// Non-positive arguments (negative net resistance) are floored at [LOG_ARG_MIN].
pub fn calc_ic(qtn: f64, fr: f64) -> f64 {
    let log_q = f64::log10(f64::max(qtn, LOG_ARG_MIN));
    let log_f = f64::log10(f64::max(fr + IC_FR_OFFSET, LOG_ARG_MIN));
    f64::sqrt((3.47 - log_q).powi(2) + (log_f + 1.22).powi(2))
}

/// Returns the stress exponent n associated with an Ic value
pub fn stress_exponent(ic: f64) -> f64 {
    if ic > IC_CLAY_LIKE {
        1.0
    } else {
        0.5
    }
}

/// Holds the result of the iterative Ic computation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IcSolution {
    /// Soil behavior type index
    pub ic: f64,

    /// Normalized cone resistance computed with the final exponent
    pub qtn: f64,

    /// Final stress exponent
    pub n: f64,
}

/// Refines Ic with a fixed number of iterations starting from the exponent `n_ini`
///
/// Each iteration computes Ic from the current Qtn, updates n from Ic,
/// and recomputes Qtn with the new n.
pub fn refine_ic(qn: f64, sigma_vo_prime: f64, fr: f64, n_ini: f64, iterations: usize) -> IcSolution {
    let mut n = n_ini;
    let mut qtn = calc_qtn(qn, sigma_vo_prime, n);
    let mut ic = calc_ic(qtn, fr);
    for _ in 0..iterations {
        ic = calc_ic(qtn, fr);
        n = stress_exponent(ic);
        qtn = calc_qtn(qn, sigma_vo_prime, n);
    }
    IcSolution { ic, qtn, n }
}

/// Computes Ic with the standard procedure: n = 1 and [IC_ITERATIONS] iterations
pub fn solve_ic(qn: f64, sigma_vo_prime: f64, fr: f64) -> IcSolution {
    refine_ic(qn, sigma_vo_prime, fr, 1.0, IC_ITERATIONS)
}

/// Normalizes raw CPT records following Robertson (2009)
///
/// # References
///
/// 1. Robertson PK (2009) Interpretation of cone penetration tests - a unified approach,
///    Canadian Geotechnical Journal, 46(11):1337-1355
#[derive(Clone, Copy, Debug)]
pub struct CptNormalizer {
    /// Overburden stress model
    pub stress: StressModel,

    /// Net area ratio of the cone
    pub area_ratio: f64,
}

impl CptNormalizer {
    /// Allocates a new instance
    pub fn new(gamma_soil: f64, water_table_depth: f64, area_ratio: f64) -> Self {
        CptNormalizer {
            stress: StressModel::new(gamma_soil, water_table_depth),
            area_ratio,
        }
    }

    /// Allocates a new instance from the analysis configuration
    pub fn from_config(config: &Config) -> Self {
        CptNormalizer::new(config.gamma_soil, config.water_table_depth, config.area_ratio)
    }

    /// Normalizes a single raw record
    pub fn normalize_one(&self, raw: &RawSample) -> Sample {
        let s = self.stress.calc(raw.depth);
        let qt = raw.qc + raw.u2 * (1.0 - self.area_ratio);
        let qn = qt - s.sigma_vo;
        let qt1 = qn / s.sigma_vo_prime;
        let rf = finite_or_zero(100.0 * raw.fs / qn);
        let fr = finite_or_zero(100.0 * raw.fs / (qt - s.sigma_vo));
        let bq = finite_or_zero((raw.u2 - s.u0) / (qt - s.sigma_vo));
        let sol = solve_ic(qn, s.sigma_vo_prime, fr);
        Sample {
            depth: raw.depth,
            qc: raw.qc,
            fs: raw.fs,
            u2: raw.u2,
            sigma_vo: s.sigma_vo,
            sigma_vo_prime: s.sigma_vo_prime,
            u0: s.u0,
            qt,
            qn,
            qt1,
            qtn: sol.qtn,
            n_exponent: sol.n,
            fr,
            rf,
            bq,
            ic: sol.ic,
            soil_type: SbtZone::from_ic(sol.ic),
        }
    }

    /// Normalizes a sequence of raw records (order is preserved)
    pub fn normalize(&self, raw: &[RawSample]) -> Vec<Sample> {
        raw.iter().map(|r| self.normalize_one(r)).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{calc_ic, calc_qtn, finite_or_zero, refine_ic, solve_ic, CptNormalizer};
    use crate::base::Config;
    use crate::classification::SbtZone;
    use crate::cpt::RawSample;
    use approx::assert_abs_diff_eq;

    #[test]
    fn finite_or_zero_works() {
        assert_eq!(finite_or_zero(1.5), 1.5);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
    }

    #[test]
    fn calc_ic_works() {
        // Qtn = 10^3.47 and Fr + 0.01 = 10^-1.22 give Ic = 0
        let qtn = f64::powf(10.0, 3.47);
        let fr = f64::powf(10.0, -1.22) - 0.01;
        assert_abs_diff_eq!(calc_ic(qtn, fr), 0.0, epsilon = 1e-12);
        // a point on the 2.6 isopleth
        let qtn = 10.0;
        let fr = f64::powf(10.0, f64::sqrt(2.6 * 2.6 - 2.47 * 2.47) - 1.22) - 0.01;
        assert_abs_diff_eq!(calc_ic(qtn, fr), 2.6, epsilon = 1e-12);
        // degenerate inputs remain finite
        assert!(calc_ic(-5.0, -3.0).is_finite());
        assert!(calc_ic(0.0, 0.0) > 0.0);
    }

    #[test]
    fn normalize_one_works() {
        let normalizer = CptNormalizer::new(18.0, 2.0, 0.8);
        let raw = RawSample::new(5.0, 10000.0, 50.0, 100.0);
        let s = normalizer.normalize_one(&raw);
        assert_eq!(s.sigma_vo, 90.0);
        assert_abs_diff_eq!(s.u0, 29.43, epsilon = 1e-12);
        assert_abs_diff_eq!(s.sigma_vo_prime, 60.57, epsilon = 1e-12);
        assert_abs_diff_eq!(s.qt, 10020.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.qn, 9930.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.qt1, 9930.0 / 60.57, epsilon = 1e-9);
        assert_abs_diff_eq!(s.fr, 100.0 * 50.0 / 9930.0, epsilon = 1e-12);
        assert_eq!(s.rf, s.fr);
        assert_abs_diff_eq!(s.bq, (100.0 - 29.43) / 9930.0, epsilon = 1e-12);

        // sand-like: n = 0.5 after the iterations
        assert_eq!(s.n_exponent, 0.5);
        assert_abs_diff_eq!(s.qtn, calc_qtn(9930.0, 60.57, 0.5), epsilon = 1e-12);
        assert!(s.ic < 2.05 && s.ic > 1.31);
        assert_eq!(s.soil_type, SbtZone::CleanToSiltySand);
    }

    #[test]
    fn normalize_handles_zero_net_resistance() {
        // qt = σvo at 10 m with γ = 18 and qc = 180
        let normalizer = CptNormalizer::new(18.0, 20.0, 1.0);
        let s = normalizer.normalize_one(&RawSample::new(10.0, 180.0, 2.0, 0.0));
        assert_eq!(s.qn, 0.0);
        assert_eq!(s.fr, 0.0);
        assert_eq!(s.rf, 0.0);
        assert_eq!(s.bq, 0.0);
        assert!(s.ic.is_finite() && s.ic > 0.0);
    }

    #[test]
    fn ic_refinement_is_idempotent() {
        let config = Config::new();
        let normalizer = CptNormalizer::from_config(&config);
        let raws = [
            RawSample::new(3.0, 8000.0, 40.0, 0.0),
            RawSample::new(6.0, 700.0, 35.0, 150.0),
            RawSample::new(12.0, 12000.0, 60.0, 0.0),
        ];
        for raw in &raws {
            let s = normalizer.normalize_one(raw);
            let again = refine_ic(s.qn, s.sigma_vo_prime, s.fr, s.n_exponent, 5);
            assert!(f64::abs(again.ic - s.ic) < 1e-6);
            assert_eq!(again.n, s.n_exponent);
        }
    }

    #[test]
    fn solve_ic_starts_with_n_equal_one() {
        // clay-like point: n stays 1.0 and Qtn equals Qt1
        let sol = solve_ic(300.0, 80.0, 5.0);
        assert_eq!(sol.n, 1.0);
        assert_abs_diff_eq!(sol.qtn, 300.0 / 80.0, epsilon = 1e-12);
        assert!(sol.ic > 2.6);
    }
}
