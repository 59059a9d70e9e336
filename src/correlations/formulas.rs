use crate::base::{IC_CLAY_LIKE, LOG_ARG_MIN};

/// Returns log10 with the argument floored at a tiny positive value
fn safe_log10(x: f64) -> f64 {
    f64::log10(f64::max(x, LOG_ARG_MIN))
}

/// Calculates the Young's modulus E (kPa)
///
/// ```text
/// αE = 0.015 · 10^(0.55 Ic + 1.68)
/// E  = max(αE · (qt - σvo), 100)
/// ```
///
/// The modulus corresponds to a small strain level (about 0.1%).
///
/// # Reference
///
/// 1. Robertson PK (2009) Interpretation of cone penetration tests: a unified
///    approach, Canadian Geotechnical Journal, 46(11):1337-1355
pub fn youngs_modulus(qt: f64, sigma_vo: f64, ic: f64) -> f64 {
    let alpha_e = 0.015 * f64::powf(10.0, 0.55 * ic + 1.68);
    f64::max(alpha_e * (qt - sigma_vo), 100.0)
}

/// Calculates the constrained (oedometric) modulus M (kPa)
///
/// ```text
/// αM = clamp(0.5 Qt1, 2, 8)
/// M  = max(αM · qt, 100)
/// ```
pub fn constrained_modulus(qt: f64, qt1: f64) -> f64 {
    let alpha_m = f64::clamp(0.5 * qt1, 2.0, 8.0);
    f64::max(alpha_m * qt, 100.0)
}

/// Estimates the plasticity index from Ic (clay-like soils only)
pub fn plasticity_index(ic: f64) -> f64 {
    f64::min((ic - IC_CLAY_LIKE) * 15.0, 60.0)
}

/// Calculates the compression index Cc
///
/// # Notes
///
/// * Sand-like soils (Ic < 2.6): `clamp(0.01 + 0.05 (Ic - 1.5), 0.01, 0.1)`
/// * Clay-like soils: `0.007 (PI + 5)` with PI estimated from Ic; soft clays
///   (qt < 1000 kPa) take at least `0.5 - 0.0003 qt`
/// * The result is never smaller than 0.01
pub fn compression_index(ic: f64, qt: f64) -> f64 {
    let cc = if ic < IC_CLAY_LIKE {
        f64::clamp(0.01 + 0.05 * (ic - 1.5), 0.01, 0.1)
    } else {
        let cc = 0.007 * (plasticity_index(ic) + 5.0);
        if qt < 1000.0 {
            f64::max(cc, 0.5 - 0.0003 * qt)
        } else {
            cc
        }
    };
    f64::max(cc, 0.01)
}

/// Calculates the recompression index Cr from the compression index
pub fn recompression_index(cc: f64, ic: f64) -> f64 {
    let cr = if ic > 2.95 {
        cc / 6.0
    } else if ic > 2.60 {
        cc / 8.0
    } else {
        cc / 10.0
    };
    f64::max(cr, 0.001)
}

/// Calculates the overconsolidation ratio OCR
///
/// ```text
/// OCR = clamp(k · (qt - σvo) / σ'vo, 1, 20)
/// ```
///
/// | Ic        | k    |
/// |-----------|------|
/// | < 2.2     | 0.33 |
/// | < 2.6     | 0.30 |
/// | < 3.0     | 0.25 |
/// | otherwise | 0.20 |
///
/// # Reference
///
/// 1. Chen BSY, Mayne PW (1996) Statistical relationships between piezocone
///    measurements and stress history of clays, Canadian Geotechnical Journal, 33(3):488-498
pub fn ocr(qt: f64, sigma_vo: f64, sigma_vo_prime: f64, ic: f64) -> f64 {
    let k = if ic < 2.2 {
        0.33
    } else if ic < 2.6 {
        0.30
    } else if ic < 3.0 {
        0.25
    } else {
        0.20
    };
    let value = k * (qt - sigma_vo) / sigma_vo_prime;
    if value.is_nan() {
        return 1.0;
    }
    f64::clamp(value, 1.0, 20.0)
}

/// Calculates the peak friction angle φ' (degrees) of sand-like soils
///
/// Uses `φ' = 17.6 + 11 log10(min(Qt1, 300))` bounded to [25, 45].
/// Returns zero for clay-like soils (Ic > 2.6).
pub fn friction_angle(qt1: f64, ic: f64) -> f64 {
    if ic > IC_CLAY_LIKE {
        return 0.0;
    }
    let phi = 17.6 + 11.0 * safe_log10(f64::min(qt1, 300.0));
    f64::clamp(phi, 25.0, 45.0)
}

/// Calculates the undrained shear strength Su (kPa) of clay-like soils
///
/// Uses `Su = (qt - σvo) / Nkt` with `Nkt = min(10 + 5 (Ic - 2.6), 20)`.
/// Returns zero for sand-like soils (Ic < 2.6).
pub fn undrained_shear_strength(qt: f64, sigma_vo: f64, ic: f64) -> f64 {
    if ic < IC_CLAY_LIKE {
        return 0.0;
    }
    let nkt = f64::min(10.0 + (ic - IC_CLAY_LIKE) * 5.0, 20.0);
    f64::max((qt - sigma_vo) / nkt, 0.0)
}

/// Calculates the hydraulic conductivity k (m/s)
///
/// Uses `log10(k) = 0.952 - 3.04 Ic` bounded to [1e-10, 1e-3].
pub fn permeability(ic: f64) -> f64 {
    f64::clamp(f64::powf(10.0, 0.952 - 3.04 * ic), 1e-10, 1e-3)
}

/// Calculates the bulk unit weight γ (kN/m³) bounded to [14, 22]
///
/// # Reference
///
/// 1. Robertson PK, Cabal KL (2010) Estimating soil unit weight from CPT,
///    2nd International Symposium on Cone Penetration Testing, Huntington Beach
pub fn unit_weight(qt: f64, ic: f64) -> f64 {
    let log_qt = safe_log10(qt / 100.0);
    let gamma = if ic < 2.05 {
        17.0 + 3.0 * log_qt
    } else if ic < IC_CLAY_LIKE {
        16.5 + 2.0 * log_qt
    } else {
        15.0 + 2.5 * log_qt
    };
    f64::clamp(gamma, 14.0, 22.0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
