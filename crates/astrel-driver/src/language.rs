//! Per-file language detection: extension-keyed lookup against the
//! `astrel-lang` registry, the table-driven side of "language (auto |
//! explicit)".

use std::path::Path;

use astrel_error::{Error, Result};

/// Resolve the language for `path`, honoring an explicit override if given.
/// `explicit = Some("auto")` behaves exactly like `None`.
pub fn detect_language(path: &str, explicit: Option<&str>) -> Result<String> {
    if let Some(lang) = explicit {
        if lang != "auto" {
            return Ok(lang.to_string());
        }
    }

    let ext = Path::new(path).extension().and_then(|e| e.to_str()).ok_or_else(|| {
        Error::language_detection_failed(path.to_string()).with_operation("driver::detect_language")
    })?;

    astrel_lang::REGISTRY
        .get_by_extension(ext)
        .map(|adapter| adapter.name().to_string())
        .ok_or_else(|| {
            Error::language_detection_failed(path.to_string()).with_operation("driver::detect_language")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_language_overrides_extension() {
        let lang = detect_language("whatever.txt", Some("python")).unwrap();
        assert_eq!(lang, "python");
    }

    #[test]
    fn test_auto_falls_through_to_extension_detection() {
        let lang = detect_language("main.py", Some("auto")).unwrap();
        assert_eq!(lang, "python");
    }

    #[test]
    fn test_detection_by_extension() {
        let lang = detect_language("src/lib.rs", None).unwrap();
        assert_eq!(lang, "rust");
    }

    #[test]
    fn test_unknown_extension_fails() {
        let err = detect_language("README", None).unwrap_err();
        assert_eq!(err.kind(), astrel_error::ErrorKind::LanguageDetectionFailed);
    }

    #[test]
    fn test_unrecognized_extension_fails() {
        let err = detect_language("file.xyz123", None).unwrap_err();
        assert_eq!(err.kind(), astrel_error::ErrorKind::LanguageDetectionFailed);
    }
}
