//! Command-line argument definitions.

use astrel_core::{ContextMode, PeekMode};
use clap::{Parser, ValueEnum};

/// `astrel`: flatten source files into the node-record table.
#[derive(Parser, Debug)]
#[command(name = "astrel", about = "Flatten source files into a queryable table of AST nodes", version)]
pub struct Cli {
    /// File paths, glob patterns, or directories to flatten (repeatable).
    #[arg(required_unless_present = "list_languages")]
    pub patterns: Vec<String>,

    /// Force every input to this language instead of detecting per file.
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Skip files that fail to read instead of aborting the run.
    #[arg(long, default_value_t = false)]
    pub ignore_errors: bool,

    /// How much of each node's source text to include in `peek`.
    #[arg(long, value_enum, default_value_t = PeekArg::Bytes)]
    pub peek: PeekArg,

    /// Byte cap used when `--peek bytes` (the default mode).
    #[arg(long, default_value_t = 80)]
    pub peek_bytes: usize,

    /// Native-context enrichment level.
    #[arg(long, value_enum, default_value_t = ContextArg::None)]
    pub context: ContextArg,

    /// Rows buffered per batch before being written out.
    #[arg(long, default_value_t = 1024)]
    pub batch_size: usize,

    /// Write rows to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print the registered languages and their extensions, then exit.
    #[arg(long, default_value_t = false)]
    pub list_languages: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeekArg {
    Bytes,
    None,
    Compact,
    Smart,
    Full,
}

impl PeekArg {
    pub fn resolve(self, peek_bytes: usize) -> PeekMode {
        match self {
            PeekArg::Bytes => PeekMode::Bytes(peek_bytes),
            PeekArg::None => PeekMode::None,
            PeekArg::Compact => PeekMode::Compact,
            PeekArg::Smart => PeekMode::Smart,
            PeekArg::Full => PeekMode::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextArg {
    None,
    NodeTypesOnly,
    Normalized,
    Native,
}

impl ContextArg {
    pub fn resolve(self) -> ContextMode {
        match self {
            ContextArg::None => ContextMode::None,
            ContextArg::NodeTypesOnly => ContextMode::NodeTypesOnly,
            ContextArg::Normalized => ContextMode::Normalized,
            ContextArg::Native => ContextMode::Native,
        }
    }
}
