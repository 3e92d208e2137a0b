//! One module per supported language, each gated behind its own `lang-*`
//! Cargo feature so a consumer only pulls in the tree-sitter grammars it
//! actually needs. [`all_adapters`] collects whichever subset is compiled
//! in; the registry in [`crate::registry`] is built from that list once.

#[cfg(feature = "lang-bash")]
pub mod bash;
#[cfg(feature = "lang-c")]
pub mod c;
#[cfg(feature = "lang-cpp")]
pub mod cpp;
#[cfg(feature = "lang-csharp")]
pub mod csharp;
#[cfg(feature = "lang-css")]
pub mod css;
#[cfg(feature = "lang-dart")]
pub mod dart;
#[cfg(feature = "lang-go")]
pub mod go;
#[cfg(feature = "lang-graphql")]
pub mod graphql;
#[cfg(feature = "lang-hcl")]
pub mod hcl;
#[cfg(feature = "lang-html")]
pub mod html;
#[cfg(feature = "lang-java")]
pub mod java;
#[cfg(feature = "lang-javascript")]
pub mod javascript;
#[cfg(feature = "lang-json")]
pub mod json;
#[cfg(feature = "lang-kotlin")]
pub mod kotlin;
#[cfg(feature = "lang-lua")]
pub mod lua;
#[cfg(feature = "lang-markdown")]
pub mod markdown;
#[cfg(feature = "lang-php")]
pub mod php;
#[cfg(feature = "lang-python")]
pub mod python;
#[cfg(feature = "lang-r")]
pub mod r_lang;
#[cfg(feature = "lang-ruby")]
pub mod ruby;
#[cfg(feature = "lang-rust")]
pub mod rust_lang;
#[cfg(feature = "lang-sql")]
pub mod sql;
#[cfg(feature = "lang-swift")]
pub mod swift;
#[cfg(feature = "lang-toml")]
pub mod toml_lang;
#[cfg(feature = "lang-typescript")]
pub mod typescript;
#[cfg(feature = "lang-yaml")]
pub mod yaml;
#[cfg(feature = "lang-zig")]
pub mod zig;

use std::sync::Arc;

use crate::adapter::LanguageAdapter;

/// Every adapter compiled in under the active feature set. The registry
/// calls this exactly once at `LazyLock` init time.
pub fn all_adapters() -> Vec<Arc<dyn LanguageAdapter>> {
    #[allow(unused_mut)]
    let mut adapters: Vec<Arc<dyn LanguageAdapter>> = Vec::new();

    #[cfg(feature = "lang-bash")]
    adapters.push(bash::adapter());
    #[cfg(feature = "lang-c")]
    adapters.push(c::adapter());
    #[cfg(feature = "lang-cpp")]
    adapters.push(cpp::adapter());
    #[cfg(feature = "lang-csharp")]
    adapters.push(csharp::adapter());
    #[cfg(feature = "lang-css")]
    adapters.push(css::adapter());
    #[cfg(feature = "lang-dart")]
    adapters.push(dart::adapter());
    #[cfg(feature = "lang-go")]
    adapters.push(go::adapter());
    #[cfg(feature = "lang-graphql")]
    adapters.push(graphql::adapter());
    #[cfg(feature = "lang-hcl")]
    adapters.push(hcl::adapter());
    #[cfg(feature = "lang-html")]
    adapters.push(html::adapter());
    #[cfg(feature = "lang-java")]
    adapters.push(java::adapter());
    #[cfg(feature = "lang-javascript")]
    adapters.push(javascript::adapter());
    #[cfg(feature = "lang-json")]
    adapters.push(json::adapter());
    #[cfg(feature = "lang-kotlin")]
    adapters.push(kotlin::adapter());
    #[cfg(feature = "lang-lua")]
    adapters.push(lua::adapter());
    #[cfg(feature = "lang-markdown")]
    adapters.push(markdown::adapter());
    #[cfg(feature = "lang-php")]
    adapters.push(php::adapter());
    #[cfg(feature = "lang-python")]
    adapters.push(python::adapter());
    #[cfg(feature = "lang-r")]
    adapters.push(r_lang::adapter());
    #[cfg(feature = "lang-ruby")]
    adapters.push(ruby::adapter());
    #[cfg(feature = "lang-rust")]
    adapters.push(rust_lang::adapter());
    #[cfg(feature = "lang-sql")]
    adapters.push(sql::adapter());
    #[cfg(feature = "lang-swift")]
    adapters.push(swift::adapter());
    #[cfg(feature = "lang-toml")]
    adapters.push(toml_lang::adapter());
    #[cfg(feature = "lang-typescript")]
    {
        adapters.push(typescript::adapter());
        adapters.push(typescript::tsx_adapter());
    }
    #[cfg(feature = "lang-yaml")]
    adapters.push(yaml::adapter());
    #[cfg(feature = "lang-zig")]
    adapters.push(zig::adapter());

    adapters
}
