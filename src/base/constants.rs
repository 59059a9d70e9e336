/// Atmospheric reference pressure Pa (kPa) used to normalize cone resistance
pub const PA_ATM: f64 = 100.0;

/// Unit weight of water γw (kN/m³)
pub const GAMMA_WATER: f64 = 9.81;

/// Floor applied to the effective overburden stress σ'vo (kPa)
pub const SIGMA_VO_PRIME_MIN: f64 = 1.0;

/// Number of seconds in one (Julian) year
pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Number of refinement iterations of the soil behavior type index Ic
pub const IC_ITERATIONS: usize = 5;

/// Stabilizer added to Fr before taking log10 in the Ic equation
pub const IC_FR_OFFSET: f64 = 0.01;

/// Smallest argument passed to log10 when the input is degenerate (≤ 0)
pub const LOG_ARG_MIN: f64 = 1e-6;

/// Ic above which the stress exponent n is set to 1.0 (clay-like behavior)
pub const IC_CLAY_LIKE: f64 = 2.6;

/// Ic change that marks a new layer during segmentation
pub const IC_LAYER_JUMP: f64 = 0.3;

/// Ic boundaries of the Robertson (2009) soil behavior type zones
pub const IC_ZONE_BOUNDARIES: [f64; 5] = [1.31, 2.05, 2.60, 2.95, 3.60];

/// Time factor Tv at 50% average degree of consolidation
pub const TV_50: f64 = 0.197;

/// Time factor Tv at 90% average degree of consolidation
pub const TV_90: f64 = 0.848;

/// Void ratio used by the rate of consolidation (mv, cv) and by the secondary compression
pub const VOID_RATIO_RATE: f64 = 0.8;

/// Earliest time (years) of the log-spaced time-settlement curve
pub const CURVE_T_MIN: f64 = 0.001;

/// Defines the directory where the analysis result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/cptsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/cptsim/test";
