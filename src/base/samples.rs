use crate::cpt::RawSample;

/// Holds some sample CPT soundings (without measurement noise)
pub struct Samples;

impl Samples {
    /// Returns a 20 m sounding with five strata (every 0.5 m)
    ///
    /// | depth (m) | soil            | qc (kPa) | fs (kPa) | u2 (kPa)     |
    /// |-----------|-----------------|----------|----------|--------------|
    /// | 0 to 3    | sand            | 1500     | 20       | 50 + 10 z    |
    /// | 3 to 7    | soft clay       | 800      | 30       | 100 + 10 z   |
    /// | 7 to 12   | dense sand      | 3000     | 40       | 150 + 10 z   |
    /// | 12 to 16  | clay            | 1200     | 35       | 200 + 10 z   |
    /// | 16 to 20  | very dense sand | 5000     | 60       | 250 + 10 z   |
    pub fn raw_five_strata() -> Vec<RawSample> {
        (0..41)
            .map(|i| {
                let z = (i as f64) * 0.5;
                let (qc, fs, u2) = if z < 3.0 {
                    (1500.0, 20.0, 50.0)
                } else if z < 7.0 {
                    (800.0, 30.0, 100.0)
                } else if z < 12.0 {
                    (3000.0, 40.0, 150.0)
                } else if z < 16.0 {
                    (1200.0, 35.0, 200.0)
                } else {
                    (5000.0, 60.0, 250.0)
                };
                RawSample::new(z, qc, fs, u2 + 10.0 * z)
            })
            .collect()
    }

    /// Returns a 10 m sounding with dense sand over soft clay (every 0.25 m)
    ///
    /// The interface is at 4 m; u2 is zero.
    pub fn raw_sand_over_clay() -> Vec<RawSample> {
        (1..=40)
            .map(|i| {
                let z = (i as f64) * 0.25;
                if z < 4.0 {
                    RawSample::new(z, 10000.0, 50.0, 0.0)
                } else {
                    RawSample::new(z, 600.0, 25.0, 0.0)
                }
            })
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
