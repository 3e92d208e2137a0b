//! # astrel-lang
//!
//! The language adapter framework: a [`LanguageAdapter`] trait implemented
//! once per supported grammar, a declarative [`entry::TypeConfigEntry`]
//! table per language mapping raw tree-sitter node-type strings to
//! `(semantic_type, name_strategy, value_strategy, flags)`, and the
//! process-wide [`registry::LanguageRegistry`] that resolves a file's
//! language to its adapter exactly once per parse.
//!
//! Every language grammar is an optional dependency behind a `lang-<name>`
//! feature; enable `full` to pull in all 27 at once (the default for
//! `astrel-cli`, not for this library).

pub mod adapter;
pub mod entry;
pub mod generic;
pub mod languages;
pub mod registry;
pub mod strategy;

pub use adapter::{GenericAdapter, LanguageAdapter};
pub use entry::{build_table, TypeConfigEntry, TypeTable, TypeTableRow, DEFAULT_ENTRY};
pub use registry::{LanguageRegistry, REGISTRY};
pub use strategy::{NameStrategy, ValueStrategy};
