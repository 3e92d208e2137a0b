//! The multi-file driver: expand → dedup → detect language → parse and
//! flatten sequentially → stream rows in batches, honoring the error
//! policy. Discovery and per-file processing are split the same way a
//! project-wide compile pipeline splits them, scoped down to per-file
//! flattening.

use std::time::{Duration, Instant};

use astrel_core::{parse_to_result, read_file, NodeRecord};
use astrel_error::Result;
use tracing::info;

use crate::discovery::expand_patterns;
use crate::language::detect_language;
use crate::options::DriverOptions;

/// A file skipped under `ignore_errors = true`, kept so the caller can see
/// what was dropped instead of the run silently under-reporting rows.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: String,
    pub error: String,
}

/// Aggregate statistics for one `read_ast` call, the multi-file analogue of
/// `astrel_core::FlattenMetrics`.
#[derive(Debug, Clone, Default)]
pub struct DriverMetrics {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub total_nodes: usize,
    pub elapsed: Duration,
    pub skipped: Vec<SkippedFile>,
}

/// Expand `patterns`, detect each file's language, parse and flatten every
/// file in sorted-path order, and hand batches of at most
/// `options.batch_size` rows to `on_batch` as they are produced. Never
/// holds more than one file's node sequence in memory at a time; `on_batch`
/// is called with a fresh, fully-owned `Vec` each time.
///
/// Error policy: under `ignore_errors = false` (the default) the first I/O
/// or language-detection error aborts the run and is returned as `Err`.
/// Under `ignore_errors = true`, such errors are recorded in
/// `DriverMetrics::skipped` and the run continues with the remaining
/// files. Parser errors are never fatal — malformed source surfaces as
/// `ERROR` rows (`semantic_type = PARSER_SYNTAX`), never an aborted run.
pub fn read_ast(
    patterns: &[String],
    options: &DriverOptions,
    mut on_batch: impl FnMut(Vec<NodeRecord>),
) -> Result<DriverMetrics> {
    let run_start = Instant::now();
    let paths = expand_patterns(patterns)?;

    let mut metrics = DriverMetrics::default();
    let mut batch: Vec<NodeRecord> = Vec::with_capacity(options.batch_size);
    let flatten_options = options.flatten_options();

    for path in &paths {
        match process_one_file(path, options, &flatten_options) {
            Ok(result) => {
                metrics.files_processed += 1;
                metrics.total_nodes += result.nodes.len();
                for node in result.nodes {
                    batch.push(node);
                    if batch.len() >= options.batch_size {
                        on_batch(std::mem::take(&mut batch));
                    }
                }
            }
            Err(err) => {
                if options.ignore_errors {
                    metrics.files_skipped += 1;
                    metrics.skipped.push(SkippedFile {
                        path: path.clone(),
                        error: err.to_string(),
                    });
                    continue;
                }
                return Err(err);
            }
        }
    }

    if !batch.is_empty() {
        on_batch(batch);
    }

    metrics.elapsed = run_start.elapsed();
    info!(
        "read_ast: {:.2}s ({} files processed, {} skipped, {} nodes)",
        metrics.elapsed.as_secs_f64(),
        metrics.files_processed,
        metrics.files_skipped,
        metrics.total_nodes
    );
    if !metrics.skipped.is_empty() {
        for skipped in &metrics.skipped {
            info!("  skipped {}: {}", skipped.path, skipped.error);
        }
    }

    Ok(metrics)
}

fn process_one_file(
    path: &str,
    options: &DriverOptions,
    flatten_options: &astrel_core::FlattenOptions,
) -> Result<astrel_core::ParseResult> {
    let language = detect_language(path, options.language.as_deref())?;
    let source = read_file(path)?;
    parse_to_result(&source, &language, path, flatten_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &std::path::Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    // Scenario E (implicit): multi-file run collects all rows in
    // deterministic path order.
    #[test]
    fn test_multi_file_run_orders_by_path() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.py", "def f():\n    pass\n");
        write(dir.path(), "b.py", "def g():\n    pass\n");

        let pattern = dir.path().to_string_lossy().into_owned();
        let mut batches: Vec<Vec<NodeRecord>> = Vec::new();
        let metrics = read_ast(&[pattern], &DriverOptions::default(), |batch| batches.push(batch)).unwrap();

        assert_eq!(metrics.files_processed, 2);
        assert_eq!(metrics.files_skipped, 0);
        let all: Vec<NodeRecord> = batches.into_iter().flatten().collect();
        let mut paths: Vec<&str> = all.iter().map(|n| n.file_path.as_str()).collect();
        paths.dedup();
        assert!(paths[0].ends_with("a.py"));
        assert!(paths[1].ends_with("b.py"));
    }

    // Scenario F: ignore_errors=true skips a missing file, keeps the rest.
    #[test]
    fn test_ignore_errors_skips_missing_file_keeps_rest() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.py", "x = 1\n");
        let missing = dir.path().join("missing.py").to_string_lossy().into_owned();

        let mut rows: Vec<NodeRecord> = Vec::new();
        let options = DriverOptions::default().with_ignore_errors(true);
        let metrics = read_ast(&[missing, a], &options, |batch| rows.extend(batch)).unwrap();

        assert_eq!(metrics.files_processed, 1);
        assert_eq!(metrics.files_skipped, 1);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|n| n.file_path.ends_with("a.py")));
    }

    #[test]
    fn test_ignore_errors_false_aborts_on_first_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.py", "x = 1\n");
        let missing = dir.path().join("missing.py").to_string_lossy().into_owned();

        let mut rows: Vec<NodeRecord> = Vec::new();
        let err = read_ast(&[missing, a], &DriverOptions::default(), |batch| rows.extend(batch)).unwrap_err();
        assert_eq!(err.kind(), astrel_error::ErrorKind::FileNotFound);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_batching_splits_rows_across_callback_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "big.py", "def f():\n    pass\ndef g():\n    pass\n");

        let options = DriverOptions::default().with_batch_size(2);
        let mut batch_sizes = Vec::new();
        let metrics = read_ast(&[path], &options, |batch| batch_sizes.push(batch.len())).unwrap();

        assert!(batch_sizes.iter().all(|&n| n <= 2));
        assert_eq!(batch_sizes.iter().sum::<usize>(), metrics.total_nodes);
    }

    #[test]
    fn test_parser_errors_never_abort_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "broken.py", "def f(:\n");

        let mut rows: Vec<NodeRecord> = Vec::new();
        let metrics = read_ast(&[path], &DriverOptions::default(), |batch| rows.extend(batch)).unwrap();
        assert_eq!(metrics.files_processed, 1);
        assert!(rows.iter().any(|n| n.semantic_type == astrel_taxonomy::PARSER_SYNTAX));
    }
}
