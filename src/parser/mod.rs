//! Parser module for module graph edge lists.
//!
//! The input is the line-oriented output of a module dependency lister such
//! as `go mod graph`: one `from to` pair per line, each token optionally
//! suffixed with `@version`.
//!
//! # Example
//!
//! ```
//! use modgraph::parser::parse_str;
//!
//! let graph = parse_str("example.com/app golang.org/x/text@v0.3.0").unwrap();
//!
//! assert_eq!(graph.root().canonical(), "example.com/app");
//! assert_eq!(graph.edge_count(), 1);
//! ```

pub mod mod_graph;
pub mod module_token;
pub mod root;

// Re-export commonly used types for convenience
pub use mod_graph::{parse_file, parse_reader, parse_str, LineError, ParseError, ParseResult, Side};
pub use module_token::{parse_module, ModuleError};
pub use root::infer_root;
