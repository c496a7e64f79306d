// src/decode/misc_params.rs
use crate::decode::{nul_fields, trimmed};

/// MiscParams is free-form vendor text. The NUL-delimited fields are
/// flattened into one string; empty fields are dropped.
pub(crate) fn decode(payload: &[u8]) -> String {
    nul_fields(payload)
        .iter()
        .map(|field| trimmed(field))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
