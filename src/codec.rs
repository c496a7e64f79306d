// src/codec.rs
use crate::error::{Result, SorError};
use byteorder::{ByteOrder, LittleEndian};

/// Bounds-checked little-endian cursor over a section payload.
///
/// Every numeric field in a SOR file is a little-endian integer of width
/// 2 or 4; reads past the end of the payload surface as
/// [`SorError::DecodeBounds`] carrying the section name and offset.
///
/// # Example
///
/// ```
/// use sor_rs::codec::SliceReader;
///
/// let mut r = SliceReader::new("FxdParams", &[0x2A, 0x00, 0x01, 0x00, 0x00, 0x00]);
/// assert_eq!(r.read_u16().unwrap(), 42);
/// assert_eq!(r.read_u32().unwrap(), 1);
/// assert!(r.read_u16().is_err());
/// ```
pub struct SliceReader<'a> {
    section: &'static str,
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    pub fn new(section: &'static str, data: &'a [u8]) -> Self {
        SliceReader {
            section,
            data,
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(SorError::DecodeBounds {
                section: self.section,
                offset: self.pos,
                len,
                available: self.data.len(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    /// Read `len` bytes as 8-bit text. SOR text fields are ASCII in
    /// practice; anything else is replaced rather than rejected.
    pub fn read_ascii(&mut self, len: usize) -> Result<String> {
        Ok(String::from_utf8_lossy(self.take(len)?).into_owned())
    }
}

/// Round to millimetres, half away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Convert a raw 16-bit trace sample to dB.
pub fn sample_db(raw: u16) -> f64 {
    raw as f64 * -1e-3
}

/// Mathematical remainder: always in `[0, divisor)` for positive divisors.
pub(crate) fn math_mod(value: f64, divisor: f64) -> f64 {
    value - divisor * (value / divisor).floor()
}

/// Reverse a hex string two characters at a time, turning the hex
/// rendering of a little-endian integer into big-endian digit order.
///
/// ```
/// assert_eq!(sor_rs::codec::reverse_hex("0ABCD123"), "23D1BC0A");
/// ```
pub fn reverse_hex(hex: &str) -> String {
    let mut out = String::with_capacity(hex.len());
    let mut rest = hex;
    while rest.len() >= 2 {
        let (pair, tail) = rest.split_at(2);
        out.insert_str(0, pair);
        rest = tail;
    }
    out
}

/// Parse the hex rendering of a little-endian integer into a signed
/// 64-bit accumulator. Sign is re-applied by the caller for the fields
/// that carry one.
pub fn parse_hex_le(hex: &str) -> Result<i64> {
    i64::from_str_radix(&reverse_hex(hex), 16)
        .map_err(|e| SorError::MalformedFile(format!("invalid hex field {hex:?}: {e}")))
}
