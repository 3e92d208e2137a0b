//! The independent 8-bit flags field, orthogonal to the semantic type code.

/// Node is a language keyword (`if`, `return`, `def`, ...).
pub const IS_KEYWORD: u8 = 0b0000_0001;
/// Node is punctuation (commas, semicolons, brackets used as separators).
pub const IS_PUNCTUATION: u8 = 0b0000_0010;
/// Node is a builtin name (`print`, `len`, `None`, ...).
pub const IS_BUILTIN: u8 = 0b0000_0100;
/// Node is declared with public/exported visibility.
pub const IS_PUBLIC: u8 = 0b0000_1000;
/// Node carries no semantic content of its own; it exists only to satisfy
/// the grammar (anonymous tokens, delimiters, syntax-only punctuation).
pub const IS_SYNTAX_ONLY: u8 = 0b0001_0000;

/// Set of [`NodeFlags`] bits.
pub type NodeFlags = u8;

/// Test whether `flags` has every bit in `mask` set.
pub const fn has_flag(flags: NodeFlags, mask: u8) -> bool {
    flags & mask == mask
}

/// Return `flags` with `mask` set.
pub const fn set_flag(flags: NodeFlags, mask: u8) -> NodeFlags {
    flags | mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_flag() {
        let flags = set_flag(set_flag(0, IS_KEYWORD), IS_SYNTAX_ONLY);
        assert!(has_flag(flags, IS_KEYWORD));
        assert!(has_flag(flags, IS_SYNTAX_ONLY));
        assert!(!has_flag(flags, IS_PUBLIC));
    }

    #[test]
    fn test_combined_mask_requires_all_bits() {
        let flags = IS_KEYWORD;
        assert!(!has_flag(flags, IS_KEYWORD | IS_PUNCTUATION));
    }
}
