// src/decode/key_events.rs
use crate::codec::{math_mod, round3, SliceReader};
use crate::diag::{DecodeWarning, Diagnostics};
use crate::error::{Result, SorError};
use crate::model::{FixedParams, KeyEvent};
use crate::section::find_first;
use std::collections::BTreeMap;

/// Fixed part of an event record; a variable-length comment may follow.
const FIXED_HEADER_LEN: usize = 42;
/// The record format carries at most nine comment bytes.
const MAX_COMMENT_LEN: usize = 9;
/// Footer bytes after the last event that belong to the section, not to
/// an event record.
const TAIL_SLACK: usize = 23;

/// Decode the KeyEvents section into the event map.
///
/// The payload opens with the event count; the records that follow are
/// variable length, so they are split before decoding (see
/// [`split_records`]).
pub(crate) fn decode(
    payload: &[u8],
    fixed: &FixedParams,
    diag: &mut dyn Diagnostics,
) -> Result<BTreeMap<u16, KeyEvent>> {
    let mut r = SliceReader::new("KeyEvents", payload);
    let count = r.read_u16()?;

    let mut events = BTreeMap::new();
    for record in split_records(payload, count)? {
        let event = decode_event(record, fixed, diag)?;
        events.insert(event.event_number, event);
    }

    Ok(events)
}

/// Split the payload into one slice per event.
///
/// A record has no length field. The boundary between event `i` and
/// event `i + 1` is found by scanning past event `i`'s fixed header for
/// the next record's two-byte little-endian index; the last record ends
/// at the section footer.
fn split_records(payload: &[u8], count: u16) -> Result<Vec<&[u8]>> {
    let mut records = Vec::with_capacity(count as usize);
    let mut start = 2usize;

    for number in 1..=count {
        if number == count {
            let end = payload
                .len()
                .checked_sub(TAIL_SLACK)
                .filter(|&end| end >= start)
                .ok_or_else(|| {
                    SorError::MalformedFile(format!(
                        "KeyEvents payload too short for event {number}"
                    ))
                })?;
            records.push(&payload[start..end]);
        } else {
            let marker = [(number + 1) as u8, 0x00];
            let end = find_first(payload, &marker, start + FIXED_HEADER_LEN).ok_or_else(|| {
                SorError::MalformedFile(format!(
                    "KeyEvents record for event {} not found",
                    number + 1
                ))
            })?;
            records.push(&payload[start..end]);
            start = end;
        }
    }

    Ok(records)
}

fn decode_event(
    record: &[u8],
    fixed: &FixedParams,
    diag: &mut dyn Diagnostics,
) -> Result<KeyEvent> {
    let mut r = SliceReader::new("KeyEvents", record);

    let event_number = r.read_u16()?;
    let raw_time_of_flight = r.read_u32()?;
    let slope_db = r.read_u16()? as f64 * 1e-3;
    let splice_loss_db = r.read_u16()? as f64 * 1e-3;
    let reflection_loss_db = reflection_loss(r.read_u32()?);
    let event_type = r.read_ascii(8)?;
    let end_of_previous_event = r.read_u32()?;
    let beg_of_current_event = r.read_u32()?;
    let end_of_current_event = r.read_u32()?;
    let beg_of_next_event = r.read_u32()?;
    let peak_current_event = r.read_u32()?;
    let comment = comment(record, event_number, diag);

    Ok(KeyEvent {
        event_number,
        location_m: location(raw_time_of_flight, fixed),
        slope_db,
        splice_loss_db,
        reflection_loss_db,
        event_type,
        end_of_previous_event,
        beg_of_current_event,
        end_of_current_event,
        beg_of_next_event,
        peak_current_event,
        comment,
    })
}

/// Reflection loss is stored as an unsigned field but means a signed
/// 32-bit millidB value: any non-zero reading is a negative dB figure.
fn reflection_loss(raw: u32) -> f64 {
    if raw > 0 {
        (raw as i64 - (1i64 << 32)) as f64 * 1e-3
    } else {
        0.0
    }
}

/// Convert the raw time-of-flight to metres, snap to the sample grid of
/// the first pulse width, and round to millimetres.
fn location(raw_time_of_flight: u32, fixed: &FixedParams) -> f64 {
    let mut metres = raw_time_of_flight as f64 * 1e-4 * fixed.fiber_speed_m_per_us;

    if let Some(&grid) = fixed.resolutions_m.first() {
        if grid > 0.0 {
            let off_grid = math_mod(metres, grid);
            if off_grid >= grid / 2.0 {
                metres += grid - off_grid;
            } else {
                metres -= off_grid;
            }
        }
    }

    round3(metres)
}

fn comment(record: &[u8], event_number: u16, diag: &mut dyn Diagnostics) -> Option<String> {
    if record.len() <= FIXED_HEADER_LEN {
        return None;
    }

    if record.len() > FIXED_HEADER_LEN + MAX_COMMENT_LEN {
        diag.warn(DecodeWarning::CommentTruncated {
            event: event_number,
        });
    }

    let end = record.len().min(FIXED_HEADER_LEN + MAX_COMMENT_LEN);
    let bytes = &record[FIXED_HEADER_LEN..end];
    let bytes = match bytes.iter().position(|&b| b == 0) {
        Some(nul) => &bytes[..nul],
        None => bytes,
    };

    if bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Fibre length is the location of the single end-of-fibre event, or 0
/// when no such event (or more than one) exists.
pub(crate) fn total_length(events: &BTreeMap<u16, KeyEvent>, diag: &mut dyn Diagnostics) -> f64 {
    let mut terminal: Option<&KeyEvent> = None;

    for event in events.values() {
        if !event.is_terminal() {
            continue;
        }
        if let Some(first) = terminal {
            diag.warn(DecodeWarning::DuplicateTerminalEvent {
                first: first.event_number,
                second: event.event_number,
            });
            return 0.0;
        }
        terminal = Some(event);
    }

    terminal.map(|event| event.location_m).unwrap_or(0.0)
}
