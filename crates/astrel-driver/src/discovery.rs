//! Pattern expansion: literal paths, glob patterns, and directory walks, all
//! collapsed into a single deduplicated, sorted file list.

use std::collections::BTreeSet;
use std::time::Instant;

use astrel_error::{Error, Result};
use globset::{Glob, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::info;

/// Directories never walked into, regardless of `.gitignore` contents —
/// vendor/build/test noise that would otherwise dwarf a project's own
/// source with dependency trees no one asked to flatten.
fn should_skip_dir(name: &str) -> bool {
    matches!(
        name,
        "test"
            | "tests"
            | "testing"
            | "example"
            | "examples"
            | "doc"
            | "docs"
            | "bench"
            | "benches"
            | "benchmark"
            | "benchmarks"
            | "target"
            | "build"
            | "dist"
            | "out"
            | "vendor"
            | "node_modules"
            | "third_party"
    )
}

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', ']'])
}

fn is_directory(pattern: &str) -> bool {
    std::path::Path::new(pattern).is_dir()
}

/// Walk `dir`, collecting every file whose path does not sit under a
/// skipped directory name. Extension filtering happens later, once the
/// caller knows (or has detected) the language per path — directory walks
/// are not language-scoped the way the extension-keyed single-pattern path
/// is.
fn walk_directory(dir: &str, out: &mut BTreeSet<String>, skipped: &mut usize) -> Result<()> {
    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(true).follow_links(false).filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        let Some(file_type) = entry.file_type() else {
            return true;
        };
        if !file_type.is_dir() {
            return true;
        }
        let Some(name) = entry.file_name().to_str() else {
            return true;
        };
        !should_skip_dir(&name.to_ascii_lowercase())
    });

    for entry in builder.build() {
        let entry = entry.map_err(|err| {
            Error::new(astrel_error::ErrorKind::TraversalFailed, err.to_string())
                .with_operation("driver::walk_directory")
                .with_context("dir", dir.to_string())
        })?;

        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            *skipped += 1;
            continue;
        }
        out.insert(entry.path().to_string_lossy().into_owned());
    }
    Ok(())
}

/// Expand a single glob pattern against its containing directory (or `.` if
/// the pattern has no directory component).
fn expand_glob(pattern: &str, out: &mut BTreeSet<String>) -> Result<()> {
    let glob = Glob::new(pattern).map_err(|err| {
        Error::invalid_argument(format!("invalid glob pattern '{pattern}': {err}"))
            .with_operation("driver::expand_glob")
    })?;
    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    let set = builder.build().map_err(|err| {
        Error::invalid_argument(err.to_string()).with_operation("driver::expand_glob")
    })?;

    let root = std::path::Path::new(pattern)
        .components()
        .take_while(|c| !matches!(c, std::path::Component::Normal(p) if p.to_string_lossy().contains(['*', '?'])))
        .collect::<std::path::PathBuf>();
    let root = if root.as_os_str().is_empty() {
        std::path::PathBuf::from(".")
    } else {
        root
    };

    // `ignore::WalkBuilder::new(".")` yields entries prefixed with `./`
    // (e.g. `./a.py`); stripping that prefix when the root itself is `.`
    // keeps a directory-less glob's matches keyed the same way a literal
    // pattern for the same file would be (`a.py`, not `./a.py`), so the two
    // forms dedupe against each other in the caller's `BTreeSet`.
    let strip_dot_prefix = root == std::path::Path::new(".");

    let mut builder = WalkBuilder::new(&root);
    builder.standard_filters(false).follow_links(false);
    for entry in builder.build() {
        let entry = entry.map_err(|err| {
            Error::new(astrel_error::ErrorKind::TraversalFailed, err.to_string())
                .with_operation("driver::expand_glob")
        })?;
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        if set.is_match(path) {
            let normalized = if strip_dot_prefix {
                path.strip_prefix(".").unwrap_or(path)
            } else {
                path
            };
            out.insert(normalized.to_string_lossy().into_owned());
        }
    }
    Ok(())
}

/// Expand every pattern (literal path, glob, or directory) into a single
/// deduplicated, sorted list of file paths.
///
/// Empty `patterns` and `None`/empty entries are rejected up front; callers
/// that permit optional language overrides reject those separately.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<String>> {
    if patterns.is_empty() {
        return Err(Error::invalid_argument("pattern list must not be empty")
            .with_operation("driver::expand_patterns"));
    }
    for pattern in patterns {
        if pattern.is_empty() {
            return Err(Error::invalid_argument("pattern entries must not be empty")
                .with_operation("driver::expand_patterns"));
        }
    }

    let discovery_start = Instant::now();
    let mut out = BTreeSet::new();
    let mut skipped = 0usize;

    for pattern in patterns {
        if is_directory(pattern) {
            walk_directory(pattern, &mut out, &mut skipped)?;
        } else if is_glob_pattern(pattern) {
            expand_glob(pattern, &mut out)?;
        } else {
            out.insert(pattern.clone());
        }
    }

    info!(
        "File discovery: {:.2}s ({} files, {} skipped non-file entries)",
        discovery_start.elapsed().as_secs_f64(),
        out.len(),
        skipped
    );

    Ok(out.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_pattern_list() {
        let err = expand_patterns(&[]).unwrap_err();
        assert_eq!(err.kind(), astrel_error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_rejects_empty_pattern_entry() {
        let err = expand_patterns(&[String::new()]).unwrap_err();
        assert_eq!(err.kind(), astrel_error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_literal_paths_deduplicated_and_sorted() {
        let patterns = vec!["b.py".to_string(), "a.py".to_string(), "a.py".to_string()];
        let expanded = expand_patterns(&patterns).unwrap();
        assert_eq!(expanded, vec!["a.py".to_string(), "b.py".to_string()]);
    }

    // Scenario E, directory-less variant: a literal pattern and a
    // directory-less glob for the same file must collapse to one entry
    // even though the glob walk is rooted at `.` and would otherwise
    // surface as `./a.py`.
    #[test]
    fn test_literal_and_directory_less_glob_of_same_file_dedupe() {
        let dir = tempfile::tempdir().unwrap();
        let original_cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        std::fs::write("a.py", "x = 1\n").unwrap();
        std::fs::write("b.py", "y = 2\n").unwrap();

        let result = expand_patterns(&["a.py".to_string(), "a.py".to_string(), "*.py".to_string()]);

        std::env::set_current_dir(original_cwd).unwrap();

        let expanded = result.unwrap();
        assert_eq!(expanded, vec!["a.py".to_string(), "b.py".to_string()]);
    }

    #[test]
    fn test_directory_walk_skips_vendor_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.py"), "x = 1\n").unwrap();
        let vendor = dir.path().join("vendor");
        std::fs::create_dir(&vendor).unwrap();
        std::fs::write(vendor.join("lib.py"), "y = 2\n").unwrap();

        let expanded = expand_patterns(&[dir.path().to_string_lossy().into_owned()]).unwrap();
        assert_eq!(expanded.len(), 1);
        assert!(expanded[0].ends_with("main.py"));
    }

    #[test]
    fn test_glob_pattern_expansion() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.py"), "x = 1\n").unwrap();
        std::fs::write(dir.path().join("b.txt"), "not python\n").unwrap();

        let pattern = dir.path().join("*.py").to_string_lossy().into_owned();
        let expanded = expand_patterns(&[pattern]).unwrap();
        assert_eq!(expanded.len(), 1);
        assert!(expanded[0].ends_with("a.py"));
    }
}
