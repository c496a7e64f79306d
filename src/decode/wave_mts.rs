// src/decode/wave_mts.rs
use crate::diag::{DecodeWarning, Diagnostics};
use crate::error::{Result, SorError};
use crate::section::{SectionIndex, SectionLabel};
use byteorder::{ByteOrder, LittleEndian};

// The end-to-end loss sits a fixed distance before the section body
// label, inside the preceding section's trailing bytes.
const TOTAL_LOSS_BACK_OFFSET: usize = 22;

/// Total fibre loss from the WaveMTSParams vendor section, in dB.
///
/// The section is optional; files from other vendors decode with a total
/// loss of 0 and a warning on the diagnostics sink.
pub(crate) fn total_loss(
    data: &[u8],
    index: &SectionIndex,
    diag: &mut dyn Diagnostics,
) -> Result<f64> {
    let at = match index.occurrences(SectionLabel::WaveMtsParams).get(1) {
        Some(&at) => at,
        None => {
            diag.warn(DecodeWarning::MissingSection {
                label: "WaveMTSParams",
            });
            return Ok(0.0);
        }
    };

    let start = at.checked_sub(TOTAL_LOSS_BACK_OFFSET).ok_or_else(|| {
        SorError::MalformedFile("WaveMTSParams section begins too close to start of file".into())
    })?;

    Ok(LittleEndian::read_u32(&data[start..start + 4]) as f64 * 1e-3)
}
