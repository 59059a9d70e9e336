use crate::base::CptError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the loading of a rectangular footing
///
/// # Default values
///
/// * `load = 1000.0` kN
/// * `width = 2.0` m
/// * `length = 2.0` m
/// * `depth = 1.0` m
/// * `water_table_depth = 2.0` m
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Applied vertical load (kN)
    pub load: f64,

    /// Width B of the footing (m)
    pub width: f64,

    /// Length L of the footing (m)
    pub length: f64,

    /// Depth of the footing base below the ground surface (m)
    pub depth: f64,

    /// Depth of the water table below the ground surface (m)
    pub water_table_depth: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        LoadConfig {
            load: 1000.0,
            width: 2.0,
            length: 2.0,
            depth: 1.0,
            water_table_depth: 2.0,
        }
    }
}

impl LoadConfig {
    /// Allocates a new instance
    pub fn new(load: f64, width: f64, length: f64, depth: f64, water_table_depth: f64) -> Result<Self, CptError> {
        let config = LoadConfig {
            load,
            width,
            length,
            depth,
            water_table_depth,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks all values
    pub fn validate(&self) -> Result<(), CptError> {
        if !self.load.is_finite() || self.load <= 0.0 {
            return Err(CptError::InputValidation("load must be > 0.0"));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(CptError::InputValidation("width must be > 0.0"));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(CptError::InputValidation("length must be > 0.0"));
        }
        if !self.depth.is_finite() || self.depth < 0.0 {
            return Err(CptError::InputValidation("depth must be ≥ 0.0"));
        }
        if !self.water_table_depth.is_finite() || self.water_table_depth < 0.0 {
            return Err(CptError::InputValidation("water_table_depth must be ≥ 0.0"));
        }
        Ok(())
    }

    /// Returns the area B·L of the footing (m²)
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Returns the contact pressure q0 = load / (B·L) (kPa)
    pub fn contact_pressure(&self) -> f64 {
        self.load / self.area()
    }

    /// Calculates the vertical stress increase at a depth below the footing base (2:1 method)
    pub fn stress_increase_at(&self, z: f64) -> f64 {
        let area = self.area();
        self.contact_pressure() * area / ((self.width + z) * (self.length + z))
    }

    /// Calculates the average stress increase (kPa) in a layer
    ///
    /// # Input
    ///
    /// * `depth_below_footing` -- depth of the center of the layer below the footing base (m)
    /// * `thickness` -- thickness of the layer (m)
    ///
    /// # Notes
    ///
    /// * The load spreads with a 2V:1H slope from the footing base
    /// * The result is the mean of the stresses at the top and bottom of the layer
    /// * A layer whose top is at or above the footing base receives no stress increase
    pub fn stress_increase(&self, depth_below_footing: f64, thickness: f64) -> f64 {
        let z_top = depth_below_footing - thickness / 2.0;
        let z_bot = depth_below_footing + thickness / 2.0;
        if z_top <= 0.0 {
            return 0.0;
        }
        (self.stress_increase_at(z_top) + self.stress_increase_at(z_bot)) / 2.0
    }
}

impl fmt::Display for LoadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Footing load\n")?;
        write!(f, "============\n")?;
        write!(f, "load = {:?}\n", self.load)?;
        write!(f, "width = {:?}\n", self.width)?;
        write!(f, "length = {:?}\n", self.length)?;
        write!(f, "depth = {:?}\n", self.depth)?;
        write!(f, "water_table_depth = {:?}\n", self.water_table_depth)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
