//! YAML adapter.

use std::sync::Arc;

use astrel_taxonomy::*;

use crate::adapter::{GenericAdapter, LanguageAdapter};
use crate::entry::build_table;
use crate::strategy::{NameStrategy, ValueStrategy};

fn table() -> crate::entry::TypeTable {
    build_table(&[
        ("block_mapping_pair", VARIABLE_DECLARATION, NameStrategy::FindIdentifier, ValueStrategy::None, 0),
        ("flow_mapping", COLLECTION_OBJECT, NameStrategy::None, ValueStrategy::None, 0),
        ("flow_sequence", COLLECTION_ARRAY, NameStrategy::None, ValueStrategy::None, 0),
        ("block_sequence", COLLECTION_ARRAY, NameStrategy::None, ValueStrategy::None, 0),
        ("comment", METADATA_COMMENT, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("anchor", IDENTIFIER_LABEL, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("alias", IDENTIFIER_LABEL, NameStrategy::NodeText, ValueStrategy::None, 0),
        ("double_quote_scalar", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("single_quote_scalar", LITERAL_STRING, NameStrategy::None, ValueStrategy::None, 0),
        ("plain_scalar", LITERAL_OTHER, NameStrategy::None, ValueStrategy::None, 0),
        ("boolean_scalar", LITERAL_BOOLEAN, NameStrategy::NodeText, ValueStrategy::None, 0),
        (":", PARSER_PUNCTUATION, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
        ("-", PARSER_PUNCTUATION, NameStrategy::None, ValueStrategy::None, IS_PUNCTUATION | IS_SYNTAX_ONLY),
    ])
}

pub fn adapter() -> Arc<dyn LanguageAdapter> {
    Arc::new(GenericAdapter {
        name: "yaml",
        extensions: &["yaml", "yml"],
        language: || tree_sitter_yaml::LANGUAGE.into(),
        table: table(),
        binary_expression_types: &[],
    })
}
