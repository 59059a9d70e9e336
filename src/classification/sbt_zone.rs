use crate::base::IC_ZONE_BOUNDARIES;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the soil behavior type (SBT) zones of Robertson (2009) identified by Ic
///
/// ```text
///            Ic < 1.31  →  zone 7: gravelly sand to dense sand
///   1.31 ≤ Ic < 2.05    →  zone 6: clean sand to silty sand
///   2.05 ≤ Ic < 2.60    →  zone 5: silty sand to sandy silt
///   2.60 ≤ Ic < 2.95    →  zone 4: clayey silt to silty clay
///   2.95 ≤ Ic < 3.60    →  zone 3: silty clay to clay
///   3.60 ≤ Ic           →  zone 2: organic soils (clay)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SbtZone {
    GravellyToDenseSand,
    CleanToSiltySand,
    SandMixtures,
    SiltMixtures,
    Clays,
    OrganicClay,
}

impl SbtZone {
    /// Returns all zones sorted by increasing Ic
    pub fn all() -> [SbtZone; 6] {
        [
            SbtZone::GravellyToDenseSand,
            SbtZone::CleanToSiltySand,
            SbtZone::SandMixtures,
            SbtZone::SiltMixtures,
            SbtZone::Clays,
            SbtZone::OrganicClay,
        ]
    }

    /// Finds the zone corresponding to an Ic value
    pub fn from_ic(ic: f64) -> Self {
        let [b1, b2, b3, b4, b5] = IC_ZONE_BOUNDARIES;
        if ic < b1 {
            SbtZone::GravellyToDenseSand
        } else if ic < b2 {
            SbtZone::CleanToSiltySand
        } else if ic < b3 {
            SbtZone::SandMixtures
        } else if ic < b4 {
            SbtZone::SiltMixtures
        } else if ic < b5 {
            SbtZone::Clays
        } else {
            SbtZone::OrganicClay
        }
    }

    /// Returns the chart label
    pub fn label(&self) -> &'static str {
        match self {
            SbtZone::GravellyToDenseSand => "Gravelly sand to dense sand",
            SbtZone::CleanToSiltySand => "Sands: clean sand to silty sand",
            SbtZone::SandMixtures => "Sand mixtures: silty sand to sandy silt",
            SbtZone::SiltMixtures => "Silt mixtures: clayey silt to silty clay",
            SbtZone::Clays => "Clays: silty clay to clay",
            SbtZone::OrganicClay => "Organic soils - clay",
        }
    }

    /// Returns the zone number of the Robertson chart
    pub fn zone_number(&self) -> usize {
        match self {
            SbtZone::GravellyToDenseSand => 7,
            SbtZone::CleanToSiltySand => 6,
            SbtZone::SandMixtures => 5,
            SbtZone::SiltMixtures => 4,
            SbtZone::Clays => 3,
            SbtZone::OrganicClay => 2,
        }
    }

    /// Returns the Ic interval `[min, max)` of the zone
    pub fn ic_range(&self) -> (f64, f64) {
        let [b1, b2, b3, b4, b5] = IC_ZONE_BOUNDARIES;
        match self {
            SbtZone::GravellyToDenseSand => (0.0, b1),
            SbtZone::CleanToSiltySand => (b1, b2),
            SbtZone::SandMixtures => (b2, b3),
            SbtZone::SiltMixtures => (b3, b4),
            SbtZone::Clays => (b4, b5),
            SbtZone::OrganicClay => (b5, f64::INFINITY),
        }
    }

    /// Indicates a coarse-grained (sand-like) zone, i.e., Ic < 2.60
    pub fn is_sand_like(&self) -> bool {
        *self <= SbtZone::SandMixtures
    }
}

impl fmt::Display for SbtZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
