// src/model/fixed_params.rs
use crate::types::DistanceUnit;
use chrono::{DateTime, Utc};

/// Acquisition parameters from the FxdParams section.
///
/// The four per-pulse-width arrays (`pulse_widths_ns`, `resolutions_m`,
/// `sample_qty`, `ranges_m`) always have length `pulse_width_no`.
/// `ref_index`, `fiber_speed_m_per_us`, `resolutions_m`, and `ranges_m`
/// are derived during decode from the raw on-disk fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FixedParams {
    /// Acquisition timestamp (stored as Unix seconds in the file).
    pub date_time: DateTime<Utc>,
    /// Raw two-character unit tag, e.g. `"km"` or `"mt"`.
    pub unit: String,
    /// Actual laser wavelength in nm.
    pub actual_wavelength_nm: f64,
    /// Acquisition offset.
    pub acquisition_offset: i32,
    /// Acquisition offset distance.
    pub acquisition_offset_distance: i32,
    /// Number of pulse widths in this scan.
    pub pulse_width_no: u16,
    /// Emitted pulse durations in ns, one per pulse width.
    pub pulse_widths_ns: Vec<u16>,
    /// Samples acquired per pulse width.
    pub sample_qty: Vec<u32>,
    /// Raw index-of-refraction field (refractive index x 1e5).
    pub ior: u32,
    /// Refractive index of the fibre.
    pub ref_index: f64,
    /// In-fibre light speed in m/us.
    pub fiber_speed_m_per_us: f64,
    /// Distance step per sample in metres, one per pulse width.
    pub resolutions_m: Vec<f64>,
    /// Backscattering coefficient in dB.
    pub backscattering_db: f64,
    /// Averaging count.
    pub averaging: u32,
    /// Averaging time in minutes.
    pub averaging_time_min: f64,
    /// Scan range in metres, one per pulse width.
    pub ranges_m: Vec<f64>,
}

impl FixedParams {
    /// The unit tag as a typed value, when it is one of the known tags.
    pub fn distance_unit(&self) -> Option<DistanceUnit> {
        DistanceUnit::from_tag(self.unit.trim())
    }
}

impl Default for FixedParams {
    fn default() -> Self {
        FixedParams {
            date_time: DateTime::UNIX_EPOCH,
            unit: String::new(),
            actual_wavelength_nm: 0.0,
            acquisition_offset: 0,
            acquisition_offset_distance: 0,
            pulse_width_no: 0,
            pulse_widths_ns: Vec::new(),
            sample_qty: Vec::new(),
            ior: 0,
            ref_index: 0.0,
            fiber_speed_m_per_us: 0.0,
            resolutions_m: Vec::new(),
            backscattering_db: 0.0,
            averaging: 0,
            averaging_time_min: 0.0,
            ranges_m: Vec::new(),
        }
    }
}
