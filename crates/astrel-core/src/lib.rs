//! # astrel-core
//!
//! The unified backend: given a language adapter from `astrel-lang` and a
//! byte slice of source, produces the flat, ordered node sequence every
//! higher-level query in this system is built on top of. One file in,
//! one [`node::ParseResult`] out — multi-file orchestration, pattern
//! expansion, and directory discovery live one layer up in `astrel-driver`.

pub mod flatten;
pub mod io;
pub mod metrics;
pub mod node;
pub mod options;
pub mod peek;

pub use flatten::parse_to_result;
pub use io::{read_file, read_lines, LineIndex};
pub use metrics::FlattenMetrics;
pub use node::{NodeRecord, ParseResult};
pub use options::{ContextMode, FlattenOptions};
pub use peek::PeekMode;
