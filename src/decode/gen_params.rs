// src/decode/gen_params.rs
use crate::decode::{nul_fields, text_field, trimmed};
use crate::diag::{DecodeWarning, Diagnostics};
use crate::model::GeneralInfo;
use byteorder::{ByteOrder, LittleEndian};

const SECTION: &str = "GenParams";

/// GenParams mixes NUL-delimited text with two binary codes.
///
/// Field 0 opens with the two-character language tag, the remainder is
/// the cable id. Field 2 opens with two 16-bit codes (fibre type and
/// scan wavelength), the remainder is location A. Fields 13 and 14 carry
/// operator and comment; everything in between is vendor-defined text.
/// A file with fewer fields decodes to empty strings.
pub(crate) fn decode(payload: &[u8], diag: &mut dyn Diagnostics) -> GeneralInfo {
    let fields = nul_fields(payload);
    let mut info = GeneralInfo::default();

    match fields.first() {
        Some(f) if f.len() >= 2 => {
            info.language = trimmed(&f[..2]);
            info.cable_id = trimmed(&f[2..]);
        }
        _ => diag.warn(DecodeWarning::MissingField {
            section: SECTION,
            field: "language / cable id",
        }),
    }

    info.fiber_id = text_field(&fields, 1, SECTION, "fiber id", diag);

    match fields.get(2) {
        Some(f) if f.len() >= 4 => {
            let fiber_code = LittleEndian::read_u16(&f[..2]);
            let wavelength_nm = LittleEndian::read_u16(&f[2..4]);
            info.fiber_type = format!("G.{fiber_code}");
            info.wavelength = format!("{wavelength_nm} nm");
            info.location_a = trimmed(&f[4..]);
        }
        _ => diag.warn(DecodeWarning::MissingField {
            section: SECTION,
            field: "fiber type / wavelength / location A",
        }),
    }

    info.location_b = text_field(&fields, 3, SECTION, "location B", diag);
    info.cable_code = text_field(&fields, 4, SECTION, "cable code", diag);

    // Build condition is the one field whose whitespace is significant.
    match fields.get(5) {
        Some(f) => info.build_condition = String::from_utf8_lossy(f).into_owned(),
        None => diag.warn(DecodeWarning::MissingField {
            section: SECTION,
            field: "build condition",
        }),
    }

    info.operator = text_field(&fields, 13, SECTION, "operator", diag);
    info.comment = text_field(&fields, 14, SECTION, "comment", diag);

    info
}
