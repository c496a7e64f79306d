// src/diag.rs
use std::fmt;

/// A non-fatal condition observed while decoding.
///
/// Missing optional sections and degraded text fields do not abort a
/// decode; they are reported through the [`Diagnostics`] sink supplied
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DecodeWarning {
    /// An optional section is absent; its fields decode to defaults.
    MissingSection { label: &'static str },
    /// A NUL-delimited text field is absent or too short.
    MissingField {
        section: &'static str,
        field: &'static str,
    },
    /// More than one event carries the end-of-fibre marker.
    DuplicateTerminalEvent { first: u16, second: u16 },
    /// An event comment was longer than the 9 bytes the record format
    /// carries; the excess was dropped.
    CommentTruncated { event: u16 },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::MissingSection { label } => {
                write!(f, "optional section {label} not present, using defaults")
            }
            DecodeWarning::MissingField { section, field } => {
                write!(f, "{section}: field {field} absent or truncated, using empty value")
            }
            DecodeWarning::DuplicateTerminalEvent { first, second } => {
                write!(
                    f,
                    "events {first} and {second} both carry an end-of-fibre marker"
                )
            }
            DecodeWarning::CommentTruncated { event } => {
                write!(f, "comment on event {event} truncated to 9 bytes")
            }
        }
    }
}

/// Out-of-band channel for decode warnings.
///
/// A decode never swallows a warning silently: every optional-section
/// fallback goes through this sink. Use [`TraceDiagnostics`] to forward
/// warnings to `tracing`, or a `Vec<DecodeWarning>` to collect them.
pub trait Diagnostics {
    fn warn(&mut self, warning: DecodeWarning);
}

/// Forwards every warning to `tracing::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceDiagnostics;

impl Diagnostics for TraceDiagnostics {
    fn warn(&mut self, warning: DecodeWarning) {
        tracing::warn!("{warning}");
    }
}

impl Diagnostics for Vec<DecodeWarning> {
    fn warn(&mut self, warning: DecodeWarning) {
        self.push(warning);
    }
}
