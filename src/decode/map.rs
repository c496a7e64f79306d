// src/decode/map.rs
use crate::error::{Result, SorError};
use crate::section::{SectionIndex, SectionLabel};
use byteorder::{ByteOrder, LittleEndian};

// "Map" plus its NUL terminator; the directory entry then carries the
// format revision as a little-endian u16 in hundredths.
const VERSION_FIELD_OFFSET: usize = 4;

/// The SR-4731 format revision from the Map directory entry.
///
/// The Map section heads the file and doubles as the directory, so the
/// first label occurrence is the one that carries the version. Revisions
/// outside the 1.x/2.x families are rejected.
pub(crate) fn bellcore_version(data: &[u8], index: &SectionIndex) -> Result<f64> {
    let at = index
        .occurrences(SectionLabel::Map)
        .first()
        .copied()
        .ok_or_else(|| SorError::MalformedFile("missing mandatory section Map".into()))?;

    let field = at + VERSION_FIELD_OFFSET;
    if field + 2 > data.len() {
        return Err(SorError::DecodeBounds {
            section: "Map",
            offset: field,
            len: 2,
            available: data.len(),
        });
    }

    let version = LittleEndian::read_u16(&data[field..field + 2]) as f64 / 100.0;
    if !(1.0..3.0).contains(&version) {
        return Err(SorError::UnsupportedVersion(version));
    }

    Ok(version)
}
