// src/model/general.rs

/// Instrument identification from the SupParams section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SupplierInfo {
    pub supplier: String,
    pub instrument_name: String,
    pub instrument_serial: String,
    pub module_name: String,
    pub module_serial: String,
    pub software_version: String,
    pub other_info: String,
}

/// Scan identification from the GenParams section.
///
/// `fiber_type` and `wavelength` are derived labels: the third
/// NUL-delimited field of the section opens with two 16-bit codes that
/// render as `"G.<code>"` and `"<nm> nm"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneralInfo {
    pub cable_id: String,
    /// Two-character language tag, e.g. `"EN"`.
    pub language: String,
    pub fiber_id: String,
    pub location_a: String,
    pub location_b: String,
    pub build_condition: String,
    pub comment: String,
    pub cable_code: String,
    pub operator: String,
    /// ITU-T fibre type label, e.g. `"G.652"`.
    pub fiber_type: String,
    /// Scan wavelength label, e.g. `"1550 nm"`.
    pub wavelength: String,
}
