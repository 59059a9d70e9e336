use crate::base::{CptError, CURVE_T_MIN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds options of the settlement analysis
///
/// # Default values
///
/// * `poisson = 0.3`
/// * `gamma_soil = 18.0` kN/m³
/// * `secondary = Some(0.02)` (Cα/Cc ratio)
/// * `num_time_points = 100`
/// * `max_time_years = 50.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementOptions {
    /// Poisson's coefficient ν used by the immediate settlement
    pub poisson: f64,

    /// Unit weight of the soil (kN/m³) for the initial effective stress of clay layers
    pub gamma_soil: f64,

    /// Ratio Cα/Cc of the secondary compression; None disables secondary compression
    pub secondary: Option<f64>,

    /// Number of (log-spaced) time points of the time-settlement curve
    pub num_time_points: usize,

    /// Last time of the time-settlement curve (years)
    pub max_time_years: f64,
}

impl Default for SettlementOptions {
    fn default() -> Self {
        SettlementOptions {
            poisson: 0.3,
            gamma_soil: 18.0,
            secondary: Some(0.02),
            num_time_points: 100,
            max_time_years: 50.0,
        }
    }
}

impl SettlementOptions {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        SettlementOptions::default()
    }

    /// Sets Poisson's coefficient
    pub fn set_poisson(&mut self, value: f64) -> Result<&mut Self, CptError> {
        if !(0.0..0.5).contains(&value) {
            return Err(CptError::InputValidation("poisson must be in [0.0, 0.5)"));
        }
        self.poisson = value;
        Ok(self)
    }

    /// Sets the unit weight of the soil
    pub fn set_gamma_soil(&mut self, value: f64) -> Result<&mut Self, CptError> {
        if !(14.0..=25.0).contains(&value) {
            return Err(CptError::InputValidation("gamma_soil must be in [14.0, 25.0]"));
        }
        self.gamma_soil = value;
        Ok(self)
    }

    /// Enables (with the Cα/Cc ratio) or disables the secondary compression
    pub fn set_secondary(&mut self, c_alpha_ratio: Option<f64>) -> Result<&mut Self, CptError> {
        if let Some(ratio) = c_alpha_ratio {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(CptError::InputValidation("c_alpha ratio must be ≥ 0.0"));
            }
        }
        self.secondary = c_alpha_ratio;
        Ok(self)
    }

    /// Sets the number of time points
    pub fn set_num_time_points(&mut self, value: usize) -> Result<&mut Self, CptError> {
        if value < 2 {
            return Err(CptError::InputValidation("num_time_points must be ≥ 2"));
        }
        self.num_time_points = value;
        Ok(self)
    }

    /// Sets the last time of the time-settlement curve
    pub fn set_max_time_years(&mut self, value: f64) -> Result<&mut Self, CptError> {
        if !value.is_finite() || value <= CURVE_T_MIN {
            return Err(CptError::InputValidation("max_time_years must be > 0.001"));
        }
        self.max_time_years = value;
        Ok(self)
    }

    /// Checks all values (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), CptError> {
        let mut copy = SettlementOptions::default();
        copy.set_poisson(self.poisson)?
            .set_gamma_soil(self.gamma_soil)?
            .set_secondary(self.secondary)?
            .set_num_time_points(self.num_time_points)?
            .set_max_time_years(self.max_time_years)?;
        Ok(())
    }
}

impl fmt::Display for SettlementOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Settlement options\n")?;
        write!(f, "==================\n")?;
        write!(f, "poisson = {:?}\n", self.poisson)?;
        write!(f, "gamma_soil = {:?}\n", self.gamma_soil)?;
        write!(f, "secondary = {:?}\n", self.secondary)?;
        write!(f, "num_time_points = {:?}\n", self.num_time_points)?;
        write!(f, "max_time_years = {:?}\n", self.max_time_years)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
