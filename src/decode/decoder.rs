// src/decode/decoder.rs
use crate::decode::{
    data_pts, fxd_params, gen_params, key_events, map, misc_params, sup_params, wave_mts,
};
use crate::diag::{DecodeWarning, Diagnostics};
use crate::error::{Result, SorError};
use crate::model::{GeneralInfo, SorRecord, SupplierInfo};
use crate::section::{SectionIndex, SectionLabel};
use std::fs;
use std::path::Path;

/// Decoder for one SOR image.
///
/// A decoder is single use: it scans the section index up front, runs
/// the section decoders in dependency order, and hands back an owned
/// [`SorRecord`]. Nothing in the record borrows from the input buffer.
///
/// # Example
///
/// ```no_run
/// use sor_rs::{SorDecoder, TraceDiagnostics};
///
/// fn main() -> sor_rs::Result<()> {
///     let record = SorDecoder::decode_file("scan.sor", &mut TraceDiagnostics)?;
///     println!(
///         "{} events over {} m",
///         record.events.len(),
///         record.total_length_m
///     );
///     Ok(())
/// }
/// ```
pub struct SorDecoder<'d, 'g> {
    data: &'d [u8],
    index: SectionIndex,
    diag: &'g mut dyn Diagnostics,
}

impl<'d, 'g> SorDecoder<'d, 'g> {
    /// Read and decode a SOR file.
    pub fn decode_file(path: impl AsRef<Path>, diag: &mut dyn Diagnostics) -> Result<SorRecord> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        Self::decode_bytes(path.display().to_string(), &data, diag)
    }

    /// Decode a SOR file through a memory mapping instead of a read.
    #[cfg(feature = "mmap")]
    pub fn decode_file_mmap(
        path: impl AsRef<Path>,
        diag: &mut dyn Diagnostics,
    ) -> Result<SorRecord> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        let map = unsafe { memmap2::Mmap::map(&file)? };
        Self::decode_bytes(path.display().to_string(), &map, diag)
    }

    /// Decode an in-memory SOR image. `file_name` only labels the
    /// resulting record.
    pub fn decode_bytes(
        file_name: impl Into<String>,
        data: &[u8],
        diag: &mut dyn Diagnostics,
    ) -> Result<SorRecord> {
        let index = SectionIndex::scan(data)?;
        SorDecoder { data, index, diag }.run(file_name.into())
    }

    fn run(mut self, file_name: String) -> Result<SorRecord> {
        let bellcore_version = map::bellcore_version(self.data, &self.index)?;
        let total_loss_db = wave_mts::total_loss(self.data, &self.index, self.diag)?;

        let supplier = match self.optional_payload(SectionLabel::SupParams)? {
            Some(payload) => sup_params::decode(payload, self.diag),
            None => SupplierInfo::default(),
        };
        let general = match self.optional_payload(SectionLabel::GenParams)? {
            Some(payload) => gen_params::decode(payload, self.diag),
            None => GeneralInfo::default(),
        };
        let misc = self
            .optional_payload(SectionLabel::MiscParams)?
            .map(misc_params::decode);

        let fixed_params = fxd_params::decode(self.require_payload(SectionLabel::FxdParams)?)?;
        let data_points = data_pts::decode(
            self.require_payload(SectionLabel::DataPts)?,
            &fixed_params,
        )?;
        let events = key_events::decode(
            self.require_payload(SectionLabel::KeyEvents)?,
            &fixed_params,
            self.diag,
        )?;

        let total_length_m = key_events::total_length(&events, self.diag);
        let avg_loss_db_per_km = if total_length_m > 0.0 {
            total_loss_db / (total_length_m / 1000.0)
        } else {
            0.0
        };

        Ok(SorRecord {
            file_name,
            bellcore_version,
            supplier,
            general,
            fixed_params,
            events,
            data_points,
            total_loss_db,
            total_length_m,
            avg_loss_db_per_km,
            misc_params: misc,
        })
    }

    /// Payload of an optional section; absence is reported on the
    /// diagnostics sink and decodes to defaults.
    fn optional_payload(&mut self, label: SectionLabel) -> Result<Option<&'d [u8]>> {
        let payload = self.index.payload(self.data, label)?;
        if payload.is_none() {
            self.diag.warn(DecodeWarning::MissingSection {
                label: label.as_str(),
            });
        }
        Ok(payload)
    }

    /// Payload of a mandatory section; absence aborts the decode.
    fn require_payload(&self, label: SectionLabel) -> Result<&'d [u8]> {
        self.index.payload(self.data, label)?.ok_or_else(|| {
            SorError::MalformedFile(format!("missing mandatory section {label}"))
        })
    }
}
