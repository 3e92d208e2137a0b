//! Named options accepted by [`crate::flatten::parse_to_result`] and
//! threaded through from the multi-file driver's `read_ast` surface.

use crate::peek::PeekMode;

/// How much native-context enrichment (signature/parameters/modifiers/doc
/// comment) to compute. Orthogonal to [`PeekMode`] — `peek` governs the
/// snippet text, `context` governs these additional columns.
///
/// Resolution of an ambiguity the distilled spec leaves open (recorded in
/// `DESIGN.md`): `NodeTypesOnly` is the minimal mode (name suppressed too,
/// only structural coordinates and the raw `type` are meaningful); `None`
/// and `Normalized` both compute the full base row (semantic
/// classification, name, peek) but no native context; `Native` adds
/// signature/parameters/modifiers/doc-comment on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextMode {
    /// Base row only: semantic classification and name, no native context.
    #[default]
    None,
    /// Minimal: `name` is suppressed; only the raw `type` plus structural
    /// and source coordinates are meaningful.
    NodeTypesOnly,
    /// Same as `None` — named separately because the distilled spec lists
    /// it as its own option value.
    Normalized,
    /// Full native-context enrichment.
    Native,
}

impl ContextMode {
    pub fn wants_name(self) -> bool {
        !matches!(self, ContextMode::NodeTypesOnly)
    }

    pub fn wants_native_context(self) -> bool {
        matches!(self, ContextMode::Native)
    }
}

/// Options accepted by a single-file flatten call.
#[derive(Debug, Clone, Copy)]
pub struct FlattenOptions {
    pub peek: PeekMode,
    pub context: ContextMode,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            peek: PeekMode::Bytes(80),
            context: ContextMode::None,
        }
    }
}

impl FlattenOptions {
    pub fn with_peek(mut self, peek: PeekMode) -> Self {
        self.peek = peek;
        self
    }

    pub fn with_context(mut self, context: ContextMode) -> Self {
        self.context = context;
        self
    }
}
