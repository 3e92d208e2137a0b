//! # astrel-cli
//!
//! A thin binary wrapping `astrel-driver`'s `read_ast` for manual exercising
//! of the flattening pipeline: pass patterns, get rows.

pub mod options;
pub mod output;

use std::time::Instant;

use anyhow::Result;
use astrel_driver::DriverOptions;
use tracing::info;

pub use options::Cli;
use output::RowWriter;

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    if args.list_languages {
        for (language, extensions) in astrel_driver::ast_supported_languages() {
            println!("{language}\t{extensions}");
        }
        return Ok(());
    }

    let mut options = DriverOptions::default()
        .with_ignore_errors(args.ignore_errors)
        .with_peek(args.peek.resolve(args.peek_bytes))
        .with_context(args.context.resolve())
        .with_batch_size(args.batch_size);
    if let Some(lang) = &args.lang {
        options = options.with_language(lang.clone());
    }

    let mut writer = match &args.output {
        Some(path) => RowWriter::to_file(path)?,
        None => RowWriter::stdout(),
    };

    let metrics = astrel_driver::read_ast(&args.patterns, &options, |batch| {
        if let Err(err) = writer.write_batch(&batch) {
            tracing::error!("failed to write batch: {err}");
        }
    })?;

    if let Some(path) = &args.output {
        info!("output written to: {}", path);
    }

    info!(
        "Flattened {} files ({} skipped, {} nodes) in {:.2}s",
        metrics.files_processed,
        metrics.files_skipped,
        metrics.total_nodes,
        metrics.elapsed.as_secs_f64()
    );

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!("Total time: {:.2}s", total_secs);
    eprintln!("Total time: {total_secs:.2}s");

    Ok(())
}
