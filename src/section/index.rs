// src/section/index.rs
use crate::error::{Result, SorError};
use crate::section::SectionLabel;
use std::collections::HashMap;

/// Byte offsets of every known section label in a SOR image.
///
/// A SOR file opens with a directory that names each section once; the
/// section bodies repeat the label in file order. A section is therefore
/// *present* when its label occurs at least twice: `occurrences[0]` is
/// the directory entry and `occurrences[1]` the body. The body payload
/// of one section runs up to the body label of the next section in file
/// order, which is how variable-length sections are bounded without an
/// offset table.
#[derive(Debug, Clone)]
pub struct SectionIndex {
    occurrences: HashMap<SectionLabel, Vec<usize>>,
    len: usize,
}

impl SectionIndex {
    /// Scan the image for every known label.
    ///
    /// Fails with [`SorError::MalformedFile`] when the trailing `Cksum`
    /// section is missing: a well-formed file carries the label once in
    /// the directory and once before the checksum itself.
    pub fn scan(data: &[u8]) -> Result<Self> {
        let mut occurrences = HashMap::with_capacity(SectionLabel::ALL.len());
        for label in SectionLabel::ALL {
            occurrences.insert(label, find_all(data, label.as_bytes()));
        }

        let index = SectionIndex {
            occurrences,
            len: data.len(),
        };

        if index.occurrences(SectionLabel::Cksum).len() < 2 {
            return Err(SorError::MalformedFile("no checksum".into()));
        }

        Ok(index)
    }

    /// All offsets at which `label` occurs, in file order.
    pub fn occurrences(&self, label: SectionLabel) -> &[usize] {
        self.occurrences
            .get(&label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the section has both a directory entry and a body.
    pub fn contains(&self, label: SectionLabel) -> bool {
        self.occurrences(label).len() >= 2
    }

    /// The payload bytes of a section, or `None` when the section is
    /// absent. The payload starts after the body label and its two-byte
    /// separator and ends at the next section body in file order.
    pub fn payload<'d>(&self, data: &'d [u8], label: SectionLabel) -> Result<Option<&'d [u8]>> {
        let occ = self.occurrences(label);
        let at = match occ.get(1) {
            Some(&at) => at,
            None => return Ok(None),
        };

        let start = at + label.len() + 2;
        let end = self.next_section_start(at).unwrap_or(self.len);

        if start > end || end > data.len() {
            return Err(SorError::MalformedFile(format!(
                "section {label} has invalid boundaries [{start}, {end})"
            )));
        }

        Ok(Some(&data[start..end]))
    }

    /// The smallest section-body offset strictly past `after`. Only
    /// labels with a directory entry and a body can bound a neighbour.
    fn next_section_start(&self, after: usize) -> Option<usize> {
        self.occurrences
            .values()
            .filter_map(|occ| occ.get(1).copied())
            .filter(|&offset| offset > after)
            .min()
    }
}

/// First occurrence of `needle` in `haystack` at or after `from`.
pub(crate) fn find_first(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut from = 0;
    while let Some(at) = find_first(haystack, needle, from) {
        offsets.push(at);
        from = at + 1;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(parts: &[&[u8]]) -> Vec<u8> {
        parts.concat()
    }

    #[test]
    fn test_missing_checksum_is_malformed() {
        // Only the directory entry, no trailing Cksum section.
        let data = b"Map\0Cksum\0payload";
        let err = SectionIndex::scan(data).unwrap_err();
        match err {
            SorError::MalformedFile(reason) => assert_eq!(reason, "no checksum"),
            other => panic!("expected MalformedFile, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_bounded_by_next_section() {
        let data = image(&[
            b"Map\0\x01\x00",
            b"FxdParams\0",
            b"DataPts\0",
            b"Cksum\0",
            b"FxdParams\0\0",
            &[1, 2, 3, 4],
            b"DataPts\0\0",
            &[9, 9],
            b"Cksum\0\0",
            &[0xAB, 0xCD],
        ]);
        let index = SectionIndex::scan(&data).unwrap();

        assert!(index.contains(SectionLabel::FxdParams));
        let payload = index.payload(&data, SectionLabel::FxdParams).unwrap().unwrap();
        assert_eq!(payload, &[1, 2, 3, 4]);

        let payload = index.payload(&data, SectionLabel::DataPts).unwrap().unwrap();
        assert_eq!(payload, &[9, 9]);

        // The trailing checksum has no next section and runs to the end.
        let payload = index.payload(&data, SectionLabel::Cksum).unwrap().unwrap();
        assert_eq!(payload, &[0xAB, 0xCD]);
    }

    #[test]
    fn test_absent_section_is_none() {
        let data = image(&[b"Map\0\x01\x00", b"Cksum\0", b"Cksum\0\0", &[0, 0]]);
        let index = SectionIndex::scan(&data).unwrap();
        assert!(!index.contains(SectionLabel::KeyEvents));
        assert!(index
            .payload(&data, SectionLabel::KeyEvents)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_find_first() {
        let haystack = b"abcabc";
        assert_eq!(find_first(haystack, b"abc", 0), Some(0));
        assert_eq!(find_first(haystack, b"abc", 1), Some(3));
        assert_eq!(find_first(haystack, b"abc", 4), None);
        assert_eq!(find_first(haystack, b"", 0), None);
    }
}
