// src/decode/fxd_params.rs
use crate::codec::SliceReader;
use crate::error::{Result, SorError};
use crate::model::FixedParams;
use crate::LIGHT_SPEED;
use chrono::DateTime;

/// Decode the FxdParams section.
///
/// The section is a fixed-layout record except that four arrays in the
/// middle repeat once per pulse width. Raw resolutions are stored in
/// units of 1e-8 seconds per sample and converted to metres using the
/// in-fibre light speed; ranges are derived as samples x resolution.
pub(crate) fn decode(payload: &[u8]) -> Result<FixedParams> {
    let mut r = SliceReader::new("FxdParams", payload);

    let timestamp = r.read_u32()?;
    let unit = r.read_ascii(2)?;
    let actual_wavelength_nm = r.read_u16()? as f64 / 10.0;
    let acquisition_offset = r.read_i32()?;
    let acquisition_offset_distance = r.read_i32()?;
    let pulse_width_no = r.read_u16()?;

    let n = pulse_width_no as usize;
    let mut pulse_widths_ns = Vec::with_capacity(n);
    for _ in 0..n {
        pulse_widths_ns.push(r.read_u16()?);
    }

    // Seconds per sample; converted to metres once the light speed is known.
    let mut raw_resolutions_s = Vec::with_capacity(n);
    for _ in 0..n {
        raw_resolutions_s.push(r.read_u32()? as f64 * 1e-8);
    }

    let mut sample_qty = Vec::with_capacity(n);
    for _ in 0..n {
        sample_qty.push(r.read_u32()?);
    }

    let ior = r.read_u32()?;
    if ior == 0 {
        return Err(SorError::MalformedFile(
            "FxdParams index of refraction is zero".into(),
        ));
    }

    let backscattering_db = r.read_u16()? as f64 * -0.1;
    let averaging = r.read_u32()?;
    let averaging_time_min = r.read_u16()? as f64 / 600.0;

    let ref_index = ior as f64 * 1e-5;
    let fiber_speed_m_per_us = LIGHT_SPEED / ref_index;
    let resolutions_m: Vec<f64> = raw_resolutions_s
        .iter()
        .map(|raw| raw * fiber_speed_m_per_us)
        .collect();
    let ranges_m = sample_qty
        .iter()
        .zip(&resolutions_m)
        .map(|(&qty, &resolution)| qty as f64 * resolution)
        .collect();

    Ok(FixedParams {
        date_time: DateTime::from_timestamp(timestamp as i64, 0).unwrap_or(DateTime::UNIX_EPOCH),
        unit,
        actual_wavelength_nm,
        acquisition_offset,
        acquisition_offset_distance,
        pulse_width_no,
        pulse_widths_ns,
        sample_qty,
        ior,
        ref_index,
        fiber_speed_m_per_us,
        resolutions_m,
        backscattering_db,
        averaging,
        averaging_time_min,
        ranges_m,
    })
}
