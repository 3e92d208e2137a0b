//! Error kinds for astrel operations.

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help callers write clear error handling logic.
/// Callers can match on `ErrorKind` to decide how to handle specific cases, per
/// the error-handling phase/offending-raw-type propagation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Feature or operation not yet implemented
    NotImplemented,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// Failed to parse source code (grammar/parser-level failure, not a
    /// malformed-but-recovered tree - those surface as ERROR nodes instead)
    ParseFailed,

    /// Invalid syntax in source file
    SyntaxError,

    /// Encoding error (invalid UTF-8, etc.)
    EncodingError,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Directory traversal failed
    TraversalFailed,

    // =========================================================================
    // Language-specific errors
    // =========================================================================
    /// Unsupported language (no adapter registered for the detected or
    /// explicit language)
    UnsupportedLanguage,

    /// Language detection failed (ambiguous or unknown extension)
    LanguageDetectionFailed,

    /// Tree-sitter grammar error (ABI mismatch between the grammar and the
    /// linked tree-sitter runtime)
    GrammarError,

    // =========================================================================
    // Validation errors
    // =========================================================================
    /// Invalid argument passed to a function (wrong option type, empty
    /// pattern list, NULL entry, etc.)
    InvalidArgument,

    /// Assertion failed
    AssertionFailed,

    /// Internal invariant violation - a bug. Must never be silently
    /// swallowed; callers should treat this as fatal.
    InvariantViolation,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::IoFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ParseFailed.to_string(), "ParseFailed");
        assert_eq!(ErrorKind::UnsupportedLanguage.to_string(), "UnsupportedLanguage");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::IoFailed.is_retryable());
        assert!(!ErrorKind::ParseFailed.is_retryable());
        assert!(!ErrorKind::InvariantViolation.is_retryable());
    }
}
