//! Conversion between byte offsets and caller offset units.
//!
//! Tree-sitter works in UTF-8 bytes while editors speaking LSP count UTF-16
//! code units. The mapper records every non-ASCII character once; ASCII runs
//! between them convert one-to-one.

use std::ops::Range;

use kerf_config::OffsetEncoding;

#[derive(Debug, Clone, Copy)]
struct WideChar {
    byte_start: usize,
    unit_start: usize,
    byte_len: usize,
    unit_len: usize,
}

/// Maps offsets of one source text between bytes and the configured unit.
#[derive(Debug, Clone)]
pub(crate) struct OffsetMapper {
    wide_chars: Vec<WideChar>,
    byte_len: usize,
    unit_len: usize,
}

impl OffsetMapper {
    pub(crate) fn new(source: &str, encoding: OffsetEncoding) -> Self {
        let mut wide_chars = Vec::new();
        let mut unit_len = source.len();
        if encoding == OffsetEncoding::Utf16 && !source.is_ascii() {
            unit_len = 0;
            for (byte_start, ch) in source.char_indices() {
                let units = ch.len_utf16();
                if !ch.is_ascii() {
                    wide_chars.push(WideChar {
                        byte_start,
                        unit_start: unit_len,
                        byte_len: ch.len_utf8(),
                        unit_len: units,
                    });
                }
                unit_len += units;
            }
        }
        Self {
            wide_chars,
            byte_len: source.len(),
            unit_len,
        }
    }

    /// Length of the source in caller units.
    pub(crate) const fn len(&self) -> usize {
        self.unit_len
    }

    /// Converts a caller offset to a byte offset.
    ///
    /// An offset falling inside a multi-unit character (the middle of a
    /// surrogate pair) rounds down to the start of that character.
    pub(crate) fn offset_to_byte(&self, offset: usize) -> usize {
        let index = self
            .wide_chars
            .partition_point(|wide| wide.unit_start <= offset);
        let byte = match index.checked_sub(1).and_then(|i| self.wide_chars.get(i)) {
            None => offset,
            Some(wide) if offset < wide.unit_start + wide.unit_len => wide.byte_start,
            Some(wide) => {
                wide.byte_start + wide.byte_len + (offset - wide.unit_start - wide.unit_len)
            }
        };
        byte.min(self.byte_len)
    }

    /// Converts a byte offset to a caller offset.
    pub(crate) fn byte_to_offset(&self, byte: usize) -> usize {
        let index = self
            .wide_chars
            .partition_point(|wide| wide.byte_start <= byte);
        let offset = match index.checked_sub(1).and_then(|i| self.wide_chars.get(i)) {
            None => byte,
            Some(wide) if byte < wide.byte_start + wide.byte_len => wide.unit_start,
            Some(wide) => {
                wide.unit_start + wide.unit_len + (byte - wide.byte_start - wide.byte_len)
            }
        };
        offset.min(self.unit_len)
    }

    pub(crate) fn range_to_bytes(&self, range: &Range<usize>) -> Range<usize> {
        self.offset_to_byte(range.start)..self.offset_to_byte(range.end)
    }

    pub(crate) fn bytes_to_range(&self, range: &Range<usize>) -> Range<usize> {
        self.byte_to_offset(range.start)..self.byte_to_offset(range.end)
    }
}
