//! Named options accepted by [`crate::pipeline::read_ast`].

use astrel_core::{ContextMode, PeekMode};

/// Options governing a multi-file `read_ast` call. `peek`/`context` are
/// forwarded unchanged to [`astrel_core::parse_to_result`] for every file;
/// the remaining fields are driver-level (pattern expansion, batching,
/// error policy).
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// `None`/`"auto"` detects per file by extension; `Some(lang)` forces
    /// every expanded path to that language.
    pub language: Option<String>,
    /// `false` (default): the first I/O or language error aborts the run.
    /// `true`: offending files are recorded and skipped; the run continues.
    pub ignore_errors: bool,
    pub peek: PeekMode,
    pub context: ContextMode,
    /// Rows are buffered and handed to the caller's batch callback once this
    /// many have accumulated (plus a final partial batch at end of run).
    pub batch_size: usize,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            language: None,
            ignore_errors: false,
            peek: PeekMode::Bytes(80),
            context: ContextMode::None,
            batch_size: 1024,
        }
    }
}

impl DriverOptions {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }

    pub fn with_peek(mut self, peek: PeekMode) -> Self {
        self.peek = peek;
        self
    }

    pub fn with_context(mut self, context: ContextMode) -> Self {
        self.context = context;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub(crate) fn flatten_options(&self) -> astrel_core::FlattenOptions {
        astrel_core::FlattenOptions::default()
            .with_peek(self.peek)
            .with_context(self.context)
    }
}
