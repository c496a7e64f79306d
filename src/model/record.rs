// src/model/record.rs
use crate::model::{FixedParams, GeneralInfo, KeyEvent, SupplierInfo};
use crate::types::DataPoint;
use std::collections::BTreeMap;

/// Everything decoded from one SOR file.
///
/// All fields are owned values; nothing borrows from the raw byte
/// buffer, so the record outlives the decode. Events are keyed by their
/// 1-based number in an ordered map, which keeps repeated decodes of the
/// same file comparable with `==`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SorRecord {
    /// The path the file was decoded from, as given by the caller.
    pub file_name: String,
    /// SR-4731 format revision, e.g. 2.0 or 2.1.
    pub bellcore_version: f64,
    pub supplier: SupplierInfo,
    pub general: GeneralInfo,
    pub fixed_params: FixedParams,
    pub events: BTreeMap<u16, KeyEvent>,
    /// The digitised trace in file order, distances cumulative.
    pub data_points: Vec<DataPoint>,
    /// End-to-end loss from the WaveMTSParams vendor section; 0 when the
    /// section is absent.
    pub total_loss_db: f64,
    /// Fibre length taken from the terminal event; 0 when no single
    /// terminal event exists.
    pub total_length_m: f64,
    /// `total_loss_db` per kilometre of `total_length_m`; 0 when the
    /// length is unknown.
    pub avg_loss_db_per_km: f64,
    /// Free-form text of the MiscParams section, when present.
    pub misc_params: Option<String>,
}
