//! Fixed-column field extraction for FORTRAN-formatted record lines

use super::error::{Result, UffError};

/// Slice `width` characters starting at character `offset`.
///
/// Offsets count characters, which match source byte columns for the
/// single-byte encodings the reader accepts. Returns `None` when the line
/// ends before the slice is complete.
pub(super) fn slice(line: &str, offset: usize, width: usize) -> Option<&str> {
    let start = byte_index(line, offset)?;
    let end = byte_index(line, offset + width)?;
    Some(&line[start..end])
}

/// Like [`slice`], but tolerates a line that ends inside the field.
pub(super) fn slice_to_end(line: &str, offset: usize, width: usize) -> Option<&str> {
    let start = byte_index(line, offset)?;
    let end = byte_index(line, offset + width).unwrap_or(line.len());
    Some(&line[start..end])
}

/// A field the record format requires; a short line is an error.
pub(super) fn required(line: &str, offset: usize, width: usize) -> Result<&str> {
    slice(line, offset, width).ok_or_else(|| UffError::LineTooShort {
        min_len: offset + width,
        len: char_len(line),
    })
}

pub(super) fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, chars: usize) -> Option<usize> {
    if chars == 0 {
        return Some(0);
    }
    let mut seen = 0;
    for (index, _) in line.char_indices() {
        if seen == chars {
            return Some(index);
        }
        seen += 1;
    }
    (seen == chars).then_some(line.len())
}

/// Parse a fixed-width integer field, trimming FORTRAN blank padding.
pub(super) fn parse_int(line: &str, offset: usize, width: usize) -> Result<i64> {
    let raw = required(line, offset, width)?;
    raw.trim()
        .parse()
        .map_err(|_| invalid_number(raw, offset, width))
}

/// Integer field that the format allows to be left entirely blank.
pub(super) fn parse_int_or_zero(line: &str, offset: usize, width: usize) -> Result<i64> {
    let raw = required(line, offset, width)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| invalid_number(raw, offset, width))
}

/// Parse a fixed-width floating-point field, locale-invariantly.
pub(super) fn parse_float(line: &str, offset: usize, width: usize) -> Result<f64> {
    let raw = required(line, offset, width)?;
    raw.trim()
        .parse()
        .map_err(|_| invalid_number(raw, offset, width))
}

fn invalid_number(raw: &str, offset: usize, width: usize) -> UffError {
    UffError::InvalidNumericField {
        text: raw.to_string(),
        column: offset,
        width,
    }
}
