// src/lib.rs
//! # sor-rs
//!
//! A Rust library for decoding Bellcore/Telcordia SR-4731 "SOR" files,
//! the interchange format OTDR instruments use to store reflectometry
//! scans.
//!
//! A SOR file is a binary container of self-labelling sections: little-
//! endian integers, NUL-terminated ASCII text, and fixed-layout records,
//! with vendor blocks (EXFO, Nokia, Wavetek, Acterna, JDSU, Yokogawa)
//! interleaved with the standard ones. `sor-rs` locates every known
//! section, resolves section boundaries, and decodes the instrument
//! metadata, acquisition parameters, digitised trace, and analysed key
//! events into one owned [`SorRecord`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sor_rs::{SorDecoder, TraceDiagnostics};
//!
//! fn main() -> sor_rs::Result<()> {
//!     let record = SorDecoder::decode_file("scan.sor", &mut TraceDiagnostics)?;
//!
//!     println!("format v{}", record.bellcore_version);
//!     println!("instrument: {}", record.supplier.instrument_name);
//!     println!("fibre length: {} m", record.total_length_m);
//!
//!     for event in record.events.values() {
//!         println!(
//!             "event {} at {} m: {}",
//!             event.event_number, event.location_m, event.event_type
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Collecting warnings
//!
//! Optional sections (vendor blocks, `GenParams`, `SupParams`) may be
//! absent; the decoder then fills defaults and reports the gap through
//! the [`Diagnostics`] sink instead of failing:
//!
//! ```rust,no_run
//! use sor_rs::{DecodeWarning, SorDecoder};
//!
//! fn main() -> sor_rs::Result<()> {
//!     let mut warnings: Vec<DecodeWarning> = Vec::new();
//!     let record = SorDecoder::decode_file("scan.sor", &mut warnings)?;
//!
//!     for warning in &warnings {
//!         eprintln!("{}: {warning}", record.file_name);
//!     }
//!     Ok(())
//! }
//! ```

// Modules
pub mod codec;
pub mod diag;
pub mod error;
pub mod model;
pub mod section;
pub mod types;

mod decode;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, SorError};

pub use diag::{DecodeWarning, Diagnostics, TraceDiagnostics};

pub use model::{FixedParams, GeneralInfo, KeyEvent, SorRecord, SupplierInfo};

pub use section::{SectionIndex, SectionLabel};

pub use types::{DataPoint, DistanceUnit};

pub use decode::SorDecoder;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use sor_rs::prelude::*;
    //! ```

    pub use crate::decode::SorDecoder;
    pub use crate::diag::{DecodeWarning, Diagnostics, TraceDiagnostics};
    pub use crate::error::{Result, SorError};
    pub use crate::model::SorRecord;
}

/// Speed of light in a vacuum, in m/us, as used for refractive-index and
/// fibre-length conversions.
pub const LIGHT_SPEED: f64 = 299.79181901;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
