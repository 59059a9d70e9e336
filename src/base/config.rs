use super::CptError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the parameters of the CPT interpretation (normalization and layering)
///
/// # Default values
///
/// * `gamma_soil = 18.0` kN/m³
/// * `water_table_depth = 2.0` m
/// * `area_ratio = 0.8`
/// * `min_layer_thickness = 0.5` m
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Unit weight of the soil γ (kN/m³) used for the overburden stress
    pub gamma_soil: f64,

    /// Depth of the water table (m) measured from the ground surface
    pub water_table_depth: f64,

    /// Net area ratio of the cone `a` used to correct qc into qt
    pub area_ratio: f64,

    /// Minimum thickness (m) of an emitted soil layer
    pub min_layer_thickness: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gamma_soil: 18.0,
            water_table_depth: 2.0,
            area_ratio: 0.8,
            min_layer_thickness: 0.5,
        }
    }
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config::default()
    }

    /// Sets the unit weight of the soil
    pub fn set_gamma_soil(&mut self, value: f64) -> Result<&mut Self, CptError> {
        if !(14.0..=25.0).contains(&value) {
            return Err(CptError::InputValidation("gamma_soil must be in [14.0, 25.0]"));
        }
        self.gamma_soil = value;
        Ok(self)
    }

    /// Sets the depth of the water table
    pub fn set_water_table_depth(&mut self, value: f64) -> Result<&mut Self, CptError> {
        if !value.is_finite() || value < 0.0 {
            return Err(CptError::InputValidation("water_table_depth must be ≥ 0.0"));
        }
        self.water_table_depth = value;
        Ok(self)
    }

    /// Sets the net area ratio of the cone
    pub fn set_area_ratio(&mut self, value: f64) -> Result<&mut Self, CptError> {
        if !(value > 0.0 && value <= 1.0) {
            return Err(CptError::InputValidation("area_ratio must be in (0.0, 1.0]"));
        }
        self.area_ratio = value;
        Ok(self)
    }

    /// Sets the minimum layer thickness
    pub fn set_min_layer_thickness(&mut self, value: f64) -> Result<&mut Self, CptError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CptError::InputValidation("min_layer_thickness must be > 0.0"));
        }
        self.min_layer_thickness = value;
        Ok(self)
    }

    /// Checks all values (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), CptError> {
        let mut copy = Config::default();
        copy.set_gamma_soil(self.gamma_soil)?
            .set_water_table_depth(self.water_table_depth)?
            .set_area_ratio(self.area_ratio)?
            .set_min_layer_thickness(self.min_layer_thickness)?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "gamma_soil = {:?}\n", self.gamma_soil)?;
        write!(f, "water_table_depth = {:?}\n", self.water_table_depth)?;
        write!(f, "area_ratio = {:?}\n", self.area_ratio)?;
        write!(f, "min_layer_thickness = {:?}\n", self.min_layer_thickness)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::base::CptError;

    #[test]
    fn new_works() {
        let config = Config::new();
        assert_eq!(config.gamma_soil, 18.0);
        assert_eq!(config.water_table_depth, 2.0);
        assert_eq!(config.area_ratio, 0.8);
        assert_eq!(config.min_layer_thickness, 0.5);
        assert_eq!(
            format!("{}", config),
            "Configuration data\n\
             ==================\n\
             gamma_soil = 18.0\n\
             water_table_depth = 2.0\n\
             area_ratio = 0.8\n\
             min_layer_thickness = 0.5\n"
        );
    }

    #[test]
    fn setters_work() -> Result<(), CptError> {
        let mut config = Config::new();
        config
            .set_gamma_soil(19.5)?
            .set_water_table_depth(0.0)?
            .set_area_ratio(1.0)?
            .set_min_layer_thickness(1.0)?;
        assert_eq!(config.gamma_soil, 19.5);
        assert_eq!(config.water_table_depth, 0.0);
        assert_eq!(config.area_ratio, 1.0);
        assert_eq!(config.min_layer_thickness, 1.0);
        config.validate()
    }

    #[test]
    fn setters_capture_errors() {
        let mut config = Config::new();
        assert_eq!(
            config.set_gamma_soil(10.0).err().unwrap().validation_message(),
            Some("gamma_soil must be in [14.0, 25.0]")
        );
        assert_eq!(
            config.set_water_table_depth(-1.0).err().unwrap().validation_message(),
            Some("water_table_depth must be ≥ 0.0")
        );
        assert_eq!(
            config.set_area_ratio(0.0).err().unwrap().validation_message(),
            Some("area_ratio must be in (0.0, 1.0]")
        );
        assert_eq!(
            config.set_min_layer_thickness(0.0).err().unwrap().validation_message(),
            Some("min_layer_thickness must be > 0.0")
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_uses_defaults() -> Result<(), CptError> {
        let config: Config = serde_json::from_str(r#"{"water_table_depth": 3.5}"#)?;
        assert_eq!(config.water_table_depth, 3.5);
        assert_eq!(config.gamma_soil, 18.0);
        config.validate()?;
        let config: Config = serde_json::from_str(r#"{"area_ratio": 1.5}"#)?;
        assert_eq!(
            config.validate().err().unwrap().validation_message(),
            Some("area_ratio must be in (0.0, 1.0]")
        );
        Ok(())
    }
}
