//! The process-lifetime language registry: built once behind a
//! [`std::sync::LazyLock`], shared immutably thereafter. No locking is
//! needed because nothing ever mutates it after the first access.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use astrel_error::{Error, ErrorKind, Result};

use crate::adapter::LanguageAdapter;

/// Name → adapter and extension → adapter lookup tables.
pub struct LanguageRegistry {
    by_name: HashMap<&'static str, Arc<dyn LanguageAdapter>>,
    by_extension: HashMap<&'static str, Arc<dyn LanguageAdapter>>,
}

impl LanguageRegistry {
    fn build() -> Result<Self> {
        let mut registry = Self {
            by_name: HashMap::new(),
            by_extension: HashMap::new(),
        };
        for adapter in crate::languages::all_adapters() {
            registry.register(adapter)?;
        }
        Ok(registry)
    }

    fn register(&mut self, adapter: Arc<dyn LanguageAdapter>) -> Result<()> {
        check_abi(adapter.name(), &adapter.tree_sitter_language())?;
        self.by_name.insert(adapter.name(), adapter.clone());
        for ext in adapter.extensions() {
            self.by_extension.insert(ext, adapter.clone());
        }
        Ok(())
    }

    /// Look up an adapter by registry name (`"python"`, `"cpp"`, ...).
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn LanguageAdapter>> {
        self.by_name.get(name).cloned()
    }

    /// Look up an adapter by file extension (without the leading dot).
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn LanguageAdapter>> {
        self.by_extension.get(ext).cloned()
    }

    /// All registered language names.
    pub fn all_languages(&self) -> Vec<&'static str> {
        self.by_name.keys().copied().collect()
    }

    /// All registered language name, extensions pairs, for
    /// `ast_supported_languages()`.
    pub fn supported_languages(&self) -> Vec<(&'static str, &'static [&'static str])> {
        self.by_name
            .values()
            .map(|adapter| (adapter.name(), adapter.extensions()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

/// Refuse to register a grammar whose reported ABI is outside the range the
/// linked tree-sitter runtime understands.
fn check_abi(name: &'static str, language: &tree_sitter::Language) -> Result<()> {
    let abi = language.abi_version();
    let min = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION;
    let max = tree_sitter::LANGUAGE_VERSION;
    if abi < min || abi > max {
        return Err(Error::new(
            ErrorKind::GrammarError,
            format!("grammar '{name}' reports ABI {abi}, runtime supports {min}..={max}"),
        )
        .with_operation("lang::register")
        .with_context("language", name));
    }
    Ok(())
}

/// The process-wide registry, built on first access from every adapter
/// enabled by the crate's `lang-*` features.
pub static REGISTRY: LazyLock<LanguageRegistry> =
    LazyLock::new(|| LanguageRegistry::build().expect("language registry must build at startup"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds_without_panicking() {
        // Forces LazyLock evaluation; also exercises check_abi for every
        // grammar compiled in under the active feature set.
        let _ = REGISTRY.len();
    }

    #[test]
    fn test_lookup_by_extension_is_consistent_with_by_name() {
        for name in REGISTRY.all_languages() {
            let by_name = REGISTRY.get_by_name(name).unwrap();
            for ext in by_name.extensions() {
                let by_ext = REGISTRY.get_by_extension(ext).unwrap();
                assert_eq!(by_ext.name(), name);
            }
        }
    }
}
