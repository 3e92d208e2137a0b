//! File I/O and line utilities: reading source bytes, and converting
//! between byte offsets and 1-based (line, column) positions.

use astrel_error::{Error, Result};

/// Read a file's full contents. I/O errors are wrapped into [`Error`] with
/// a kind derived from the underlying `io::ErrorKind` (see
/// `astrel_error`'s `From<std::io::Error>`), carrying the path as context.
pub fn read_file(path: &str) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|err| {
        Error::from(err)
            .with_operation("io::read_file")
            .with_context("path", path.to_string())
    })
}

/// A prefix-sum array of line-start byte offsets, for converting node spans
/// to line ranges and back without rescanning the source on every lookup.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[i]` is the byte offset of the first byte of line `i`
    /// (0-based internally; the public API is 1-based per the row schema).
    line_starts: Vec<usize>,
    source_len: usize,
}

impl LineIndex {
    /// Build the index by scanning `source` once for `\n` bytes.
    pub fn new(source: &[u8]) -> Self {
        let mut line_starts = vec![0usize];
        for (i, &byte) in source.iter().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            source_len: source.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a 1-based `(line, column)` pair.
    pub fn byte_to_point(&self, byte: usize) -> (u32, u32) {
        let byte = byte.min(self.source_len);
        let line_idx = match self.line_starts.binary_search(&byte) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let column = byte - self.line_starts[line_idx];
        (line_idx as u32 + 1, column as u32 + 1)
    }

    /// Convert a 1-based `(line, column)` pair back to a byte offset.
    /// Returns `None` if `line` is out of range.
    pub fn point_to_byte(&self, line: u32, column: u32) -> Option<usize> {
        let line_idx = (line.checked_sub(1)?) as usize;
        let start = *self.line_starts.get(line_idx)?;
        Some(start + (column.saturating_sub(1)) as usize)
    }

    /// The half-open byte range covered by 1-based `line` (not including
    /// its trailing newline).
    pub fn line_byte_range(&self, line: u32, source: &[u8]) -> Option<(usize, usize)> {
        let line_idx = (line.checked_sub(1)?) as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&next| next.saturating_sub(1))
            .unwrap_or(source.len());
        let end = end.min(source.len()).max(start);
        Some((start, end))
    }
}

/// Retrieve the text of a 1-based inclusive line range (or the whole file
/// when `range` is `None`) — the "get source for a function" capability.
pub fn read_lines(path: &str, range: Option<(u32, u32)>) -> Result<Vec<(u32, String)>> {
    let bytes = read_file(path)?;
    let index = LineIndex::new(&bytes);
    let (start, end) = range.unwrap_or((1, index.line_count() as u32));

    let mut out = Vec::new();
    for line in start..=end {
        let Some((lo, hi)) = index.line_byte_range(line, &bytes) else {
            break;
        };
        out.push((line, String::from_utf8_lossy(&bytes[lo..hi]).into_owned()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_byte_to_point_round_trip() {
        let source = b"line one\nline two\nline three";
        let index = LineIndex::new(source);
        assert_eq!(index.byte_to_point(0), (1, 1));
        assert_eq!(index.byte_to_point(9), (2, 1));
        assert_eq!(index.byte_to_point(18), (3, 1));
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn test_point_to_byte_round_trip() {
        let source = b"abc\ndef\nghi";
        let index = LineIndex::new(source);
        for byte in 0..source.len() {
            let (line, col) = index.byte_to_point(byte);
            assert_eq!(index.point_to_byte(line, col), Some(byte));
        }
    }

    #[test]
    fn test_line_byte_range_excludes_newline() {
        let source = b"abc\ndef\n";
        let index = LineIndex::new(source);
        let (lo, hi) = index.line_byte_range(1, source).unwrap();
        assert_eq!(&source[lo..hi], b"abc");
        let (lo, hi) = index.line_byte_range(2, source).unwrap();
        assert_eq!(&source[lo..hi], b"def");
    }

    #[test]
    fn test_read_file_missing_path_is_file_not_found() {
        let err = read_file("/nonexistent/path/does/not/exist.rs").unwrap_err();
        assert_eq!(err.kind(), astrel_error::ErrorKind::FileNotFound);
    }

    #[test]
    fn test_read_lines_with_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        std::fs::write(&path, "one\ntwo\nthree\nfour\n").unwrap();
        let lines = read_lines(path.to_str().unwrap(), Some((2, 3))).unwrap();
        assert_eq!(lines, vec![(2, "two".to_string()), (3, "three".to_string())]);
    }

    #[test]
    fn test_read_lines_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        std::fs::write(&path, "a\nb\nc\n").unwrap();
        let lines = read_lines(path.to_str().unwrap(), None).unwrap();
        assert_eq!(lines.len(), 3);
    }
}
