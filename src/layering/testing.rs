use crate::classification::SbtZone;
use crate::cpt::Sample;

/// Returns a sample with prescribed depth, Ic and qc (other values are consistent placeholders)
pub(crate) fn sample_with_ic(depth: f64, ic: f64, qc: f64) -> Sample {
    let sigma_vo = 18.0 * depth;
    let sigma_vo_prime = f64::max(sigma_vo, 1.0);
    Sample {
        depth,
        qc,
        fs: 0.01 * qc,
        u2: 0.0,
        sigma_vo,
        sigma_vo_prime,
        u0: 0.0,
        qt: qc,
        qn: qc - sigma_vo,
        qt1: (qc - sigma_vo) / sigma_vo_prime,
        qtn: (qc - sigma_vo) / sigma_vo_prime,
        n_exponent: 1.0,
        fr: 1.0,
        rf: 1.0,
        bq: 0.0,
        ic,
        soil_type: SbtZone::from_ic(ic),
    }
}

/// Returns samples every `dz` meters from `z0` with the given Ic values
pub(crate) fn samples_with_ic(z0: f64, dz: f64, ics: &[f64]) -> Vec<Sample> {
    ics.iter()
        .enumerate()
        .map(|(i, ic)| sample_with_ic(z0 + (i as f64) * dz, *ic, 1000.0))
        .collect()
}
