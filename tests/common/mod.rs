// tests/common/mod.rs
//! Synthetic SOR images for integration tests.
//!
//! A built image mimics the SR-4731 layout: a directory that opens with
//! `Map`, the format revision, and one entry per section, followed by
//! the section bodies (label, two separator bytes, payload) and a
//! trailing `Cksum` section.
#![allow(dead_code)]

/// Index of refraction chosen so the in-fibre light speed is ~200 m/us.
pub const IOR: u32 = 149_896;
/// Raw resolution (1e-8 s/sample) that yields ~1 m per sample at ~200 m/us.
pub const RAW_RESOLUTION: u32 = 500_000;

pub struct SorImage {
    version: u16,
    with_checksum: bool,
    sections: Vec<(&'static str, Vec<u8>)>,
}

impl SorImage {
    pub fn new(version: u16) -> Self {
        SorImage {
            version,
            with_checksum: true,
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, label: &'static str, payload: Vec<u8>) -> Self {
        self.sections.push((label, payload));
        self
    }

    /// Drop the trailing checksum section, leaving only the directory
    /// mention of `Cksum`.
    pub fn without_checksum(mut self) -> Self {
        self.with_checksum = false;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();

        // Directory: Map heads the file and carries the revision.
        out.extend_from_slice(b"Map\0");
        out.extend_from_slice(&self.version.to_le_bytes());
        for (label, _) in &self.sections {
            out.extend_from_slice(label.as_bytes());
            out.push(0);
        }
        out.extend_from_slice(b"Cksum\0");

        // Section bodies in file order.
        for (label, payload) in &self.sections {
            out.extend_from_slice(label.as_bytes());
            out.extend_from_slice(&[0, 0]);
            out.extend_from_slice(payload);
        }

        if self.with_checksum {
            out.extend_from_slice(b"Cksum");
            out.extend_from_slice(&[0, 0]);
            out.extend_from_slice(&[0xAB, 0xCD]);
        }

        out
    }
}

pub fn sup_params_payload() -> Vec<u8> {
    b"EXFO\0FTB-500\0SN1234\0FTB-7300E\0MSN99\0v2.6.1\0factory cal\0".to_vec()
}

pub fn gen_params_payload() -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(b"ENCABLE-A1\0");
    p.extend_from_slice(b"FIBRE-07\0");
    p.extend_from_slice(&652u16.to_le_bytes());
    p.extend_from_slice(&1550u16.to_le_bytes());
    p.extend_from_slice(b"Amsterdam\0");
    p.extend_from_slice(b"Rotterdam\0");
    p.extend_from_slice(b"CC-9\0");
    p.extend_from_slice(b"BC\0");
    for _ in 6..13 {
        p.push(0);
    }
    p.extend_from_slice(b"jdoe\0");
    p.extend_from_slice(b"repair splice 3\0");
    p
}

pub fn fxd_params_payload(
    pulse_widths: &[u16],
    raw_resolutions: &[u32],
    sample_qty: &[u32],
    ior: u32,
) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(&1_700_000_000u32.to_le_bytes());
    p.extend_from_slice(b"km");
    p.extend_from_slice(&15_500u16.to_le_bytes());
    p.extend_from_slice(&0i32.to_le_bytes());
    p.extend_from_slice(&0i32.to_le_bytes());
    p.extend_from_slice(&(pulse_widths.len() as u16).to_le_bytes());
    for &pw in pulse_widths {
        p.extend_from_slice(&pw.to_le_bytes());
    }
    for &res in raw_resolutions {
        p.extend_from_slice(&res.to_le_bytes());
    }
    for &qty in sample_qty {
        p.extend_from_slice(&qty.to_le_bytes());
    }
    p.extend_from_slice(&ior.to_le_bytes());
    p.extend_from_slice(&23u16.to_le_bytes());
    p.extend_from_slice(&16u32.to_le_bytes());
    p.extend_from_slice(&1800u16.to_le_bytes());
    p
}

pub fn data_pts_payload(blocks: &[&[u16]]) -> Vec<u8> {
    let mut p = vec![0u8; 20];
    for block in blocks {
        for &sample in *block {
            p.extend_from_slice(&sample.to_le_bytes());
        }
    }
    p
}

pub fn event_record(number: u16, raw_tof: u32, event_type: &str, comment: &[u8]) -> Vec<u8> {
    let mut rec = Vec::new();
    rec.extend_from_slice(&number.to_le_bytes());
    rec.extend_from_slice(&raw_tof.to_le_bytes());
    rec.extend_from_slice(&150u16.to_le_bytes());
    rec.extend_from_slice(&40u16.to_le_bytes());
    rec.extend_from_slice(&0xFFFF_FD8Fu32.to_le_bytes());
    rec.extend_from_slice(event_type.as_bytes());
    for context in [10u32, 20, 30, 40, 25] {
        rec.extend_from_slice(&context.to_le_bytes());
    }
    rec.extend_from_slice(comment);
    rec
}

/// KeyEvents payload: count, records, and the 23-byte section footer.
/// When the section is followed by `WaveMTSParams`, the footer's bytes
/// at -22..-18 from the next label carry the total loss in millidB.
pub fn key_events_payload(records: &[Vec<u8>], total_loss_milli_db: Option<u32>) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(&(records.len() as u16).to_le_bytes());
    for rec in records {
        p.extend_from_slice(rec);
    }
    p.push(0);
    p.extend_from_slice(&total_loss_milli_db.unwrap_or(0).to_le_bytes());
    p.extend_from_slice(&[0u8; 18]);
    p
}

/// A complete, well-formed v2.0 image: one pulse width, four samples,
/// two events (the second marks the fibre end), and a WaveMTSParams
/// block carrying 3 dB of total loss.
pub fn standard_image() -> Vec<u8> {
    let events = [
        event_record(1, 50, "1F9999LS", b""),
        event_record(2, 150, "0E99999F", b"end"),
    ];

    SorImage::new(200)
        .section("SupParams", sup_params_payload())
        .section("GenParams", gen_params_payload())
        .section(
            "FxdParams",
            fxd_params_payload(&[30], &[RAW_RESOLUTION], &[4], IOR),
        )
        .section(
            "DataPts",
            data_pts_payload(&[&[0, 12_500, 25_000, 37_500]]),
        )
        .section("KeyEvents", key_events_payload(&events, Some(3000)))
        .section("WaveMTSParams", vec![0u8; 8])
        .section("MiscParams", b"cal due 2026-09\0".to_vec())
        .build()
}
