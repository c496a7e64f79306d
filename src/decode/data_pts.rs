// src/decode/data_pts.rs
use crate::codec::{round3, sample_db, SliceReader};
use crate::error::Result;
use crate::model::FixedParams;
use crate::types::DataPoint;

// Block count, total sample count, and scaling marker; the per-pulse
// sample counts in FxdParams are authoritative, so the preamble is
// skipped rather than parsed.
const PREAMBLE_LEN: usize = 20;

/// Decode the DataPts section into the trace.
///
/// One block of 16-bit samples follows the preamble for each pulse
/// width. Distances accumulate across blocks at that block's resolution
/// and are rounded to millimetres on emission, as is each power level.
pub(crate) fn decode(payload: &[u8], fixed: &FixedParams) -> Result<Vec<DataPoint>> {
    let mut r = SliceReader::new("DataPts", payload);
    r.skip(PREAMBLE_LEN)?;

    let total: usize = fixed.sample_qty.iter().map(|&qty| qty as usize).sum();
    let mut points = Vec::with_capacity(total);
    let mut cumulative_m = 0.0f64;

    for (block, &qty) in fixed.sample_qty.iter().enumerate() {
        let resolution_m = fixed.resolutions_m[block];
        for _ in 0..qty {
            let raw = r.read_u16()?;
            points.push(DataPoint::new(round3(cumulative_m), round3(sample_db(raw))));
            cumulative_m += resolution_m;
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SorError;

    fn fixed(sample_qty: Vec<u32>, resolutions_m: Vec<f64>) -> FixedParams {
        FixedParams {
            pulse_width_no: sample_qty.len() as u16,
            sample_qty,
            resolutions_m,
            ..FixedParams::default()
        }
    }

    fn payload(samples: &[u16]) -> Vec<u8> {
        let mut p = vec![0u8; PREAMBLE_LEN];
        for &s in samples {
            p.extend_from_slice(&s.to_le_bytes());
        }
        p
    }

    #[test]
    fn test_single_block() {
        let fixed = fixed(vec![4], vec![1.0]);
        let points = decode(&payload(&[0, 12_500, 25_000, 37_500]), &fixed).unwrap();

        assert_eq!(points.len(), 4);
        let distances: Vec<f64> = points.iter().map(|p| p.distance_m).collect();
        assert_eq!(distances, vec![0.0, 1.0, 2.0, 3.0]);
        let powers: Vec<f64> = points.iter().map(|p| p.power_db).collect();
        assert_eq!(powers, vec![0.0, -12.5, -25.0, -37.5]);
    }

    #[test]
    fn test_distance_accumulates_across_blocks() {
        let fixed = fixed(vec![2, 2], vec![0.5, 2.0]);
        let points = decode(&payload(&[1, 2, 3, 4]), &fixed).unwrap();

        let distances: Vec<f64> = points.iter().map(|p| p.distance_m).collect();
        assert_eq!(distances, vec![0.0, 0.5, 1.0, 3.0]);
    }

    #[test]
    fn test_short_payload_is_bounds_error() {
        let fixed = fixed(vec![8], vec![1.0]);
        let err = decode(&payload(&[1, 2]), &fixed).unwrap_err();
        assert!(matches!(err, SorError::DecodeBounds { .. }));
    }

    #[test]
    fn test_missing_preamble_is_bounds_error() {
        let fixed = fixed(vec![1], vec![1.0]);
        let err = decode(&[0u8; 10], &fixed).unwrap_err();
        assert!(matches!(err, SorError::DecodeBounds { .. }));
    }
}
