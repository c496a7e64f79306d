// src/types.rs

/// A single point of the digitised reflectometry trace.
///
/// `distance_m` is the cumulative distance along the fibre, rounded to
/// millimetres; `power_db` is the backscattered power level at that
/// distance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataPoint {
    pub distance_m: f64,
    pub power_db: f64,
}

impl DataPoint {
    pub fn new(distance_m: f64, power_db: f64) -> Self {
        DataPoint {
            distance_m,
            power_db,
        }
    }
}

/// Distance unit tag stored in the FxdParams section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DistanceUnit {
    Kilometres,
    Metres,
    Feet,
    Kilofeet,
    Miles,
}

impl DistanceUnit {
    /// Parse the two-character unit tag. Unknown tags yield `None`; the
    /// raw tag is still available on the decoded record.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "km" => Some(DistanceUnit::Kilometres),
            "mt" => Some(DistanceUnit::Metres),
            "ft" => Some(DistanceUnit::Feet),
            "kf" => Some(DistanceUnit::Kilofeet),
            "mi" => Some(DistanceUnit::Miles),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometres => "km",
            DistanceUnit::Metres => "mt",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Kilofeet => "kf",
            DistanceUnit::Miles => "mi",
        }
    }
}
