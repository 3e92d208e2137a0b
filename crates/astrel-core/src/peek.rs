//! The `peek` text-snippet policy: a bounded, always-valid-UTF-8 preview of
//! a node's source slice.

/// How much of a node's source slice to copy into its `peek` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeekMode {
    /// First `N` bytes, truncated at a UTF-8 boundary.
    Bytes(usize),
    /// Always empty.
    None,
    /// Internal whitespace runs collapsed to a single space, capped at
    /// [`COMPACT_CAP`] bytes.
    Compact,
    /// First logical line (up to the first newline), capped at
    /// [`SMART_CAP`] bytes.
    Smart,
    /// The entire node slice, uncapped.
    Full,
}

const COMPACT_CAP: usize = 160;
const SMART_CAP: usize = 120;

/// Truncate `s` to at most `max_bytes`, stepping back to the nearest
/// preceding UTF-8 character boundary so the result is always valid UTF-8.
fn truncate_utf8(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Compute the `peek` text for a node's raw source slice, per `mode`.
///
/// `slice` is assumed to come from `source[start_byte..end_byte]`; it may be
/// ill-formed UTF-8 (binary data, a mid-codepoint split from an adversarial
/// byte range) so we always go through `from_utf8_lossy` before applying any
/// mode-specific transform, which guarantees the result is valid UTF-8 per
/// invariant 9.
pub fn compute_peek(slice: &[u8], mode: PeekMode) -> String {
    match mode {
        PeekMode::None => String::new(),
        PeekMode::Bytes(n) => {
            let lossy = String::from_utf8_lossy(slice);
            truncate_utf8(&lossy, n).to_string()
        }
        PeekMode::Full => String::from_utf8_lossy(slice).into_owned(),
        PeekMode::Compact => {
            let lossy = String::from_utf8_lossy(slice);
            let collapsed = collapse_whitespace(&lossy);
            truncate_utf8(&collapsed, COMPACT_CAP).to_string()
        }
        PeekMode::Smart => {
            let lossy = String::from_utf8_lossy(slice);
            let first_line = lossy.split('\n').next().unwrap_or("");
            truncate_utf8(first_line, SMART_CAP).to_string()
        }
    }
}

/// Collapse runs of whitespace (including newlines) into a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
                in_ws = true;
            }
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_mode_is_always_empty() {
        assert_eq!(compute_peek(b"hello world", PeekMode::None), "");
    }

    #[test]
    fn test_full_mode_returns_entire_slice() {
        assert_eq!(compute_peek(b"hello world", PeekMode::Full), "hello world");
    }

    #[test]
    fn test_bytes_mode_truncates_at_char_boundary() {
        // "héllo" - the 'é' is 2 bytes, so truncating at byte 2 must step
        // back to byte 1 rather than splitting the codepoint.
        let s = "héllo".as_bytes();
        let peek = compute_peek(s, PeekMode::Bytes(2));
        assert!(peek.is_char_boundary(peek.len()));
        assert_eq!(peek, "h");
    }

    #[test]
    fn test_compact_mode_collapses_whitespace() {
        let peek = compute_peek(b"fn  foo(\n    a,\n    b,\n)", PeekMode::Compact);
        assert_eq!(peek, "fn foo( a, b, )");
    }

    #[test]
    fn test_smart_mode_stops_at_first_newline() {
        let peek = compute_peek(b"first line\nsecond line", PeekMode::Smart);
        assert_eq!(peek, "first line");
    }

    #[test]
    fn test_never_emits_invalid_utf8_for_ill_formed_input() {
        let bytes: &[u8] = &[0x68, 0x65, 0xff, 0xfe, 0x6c, 0x6c, 0x6f];
        for mode in [PeekMode::None, PeekMode::Bytes(3), PeekMode::Compact, PeekMode::Smart, PeekMode::Full] {
            let peek = compute_peek(bytes, mode);
            assert!(std::str::from_utf8(peek.as_bytes()).is_ok());
        }
    }
}
