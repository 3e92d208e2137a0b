//! # astrel-driver
//!
//! The multi-file driver: pattern expansion (literal paths, globs, and
//! `.gitignore`-aware directory walks), deduplication, per-file language
//! detection, sequential parse-and-flatten with batched streaming, and the
//! two-mode error policy. This is the external-interface layer — the
//! primary `read_ast` table-valued function and the ancillary scalar
//! functions a query layer composes on top of the row schema.

pub mod discovery;
pub mod language;
pub mod options;
pub mod pipeline;

pub use discovery::expand_patterns;
pub use language::detect_language;
pub use options::DriverOptions;
pub use pipeline::{read_ast, DriverMetrics, SkippedFile};

/// `ast_supported_languages() -> table(language text, extensions text)` —
/// every language name registered in `astrel-lang`, paired with its
/// extensions (space-joined, the simplest text rendering of a list column
/// for a scalar/table function boundary).
pub fn ast_supported_languages() -> Vec<(&'static str, String)> {
    astrel_lang::REGISTRY
        .supported_languages()
        .into_iter()
        .map(|(name, extensions)| (name, extensions.join(" ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages_lists_python() {
        let languages = ast_supported_languages();
        assert!(languages.iter().any(|(name, _)| *name == "python"));
    }
}
