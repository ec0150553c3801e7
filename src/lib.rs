//! modgraph - render module dependency graphs
//!
//! This crate parses the edge-list output of a module dependency lister
//! (`go mod graph` and friends) into a [`graph::DependencyGraph`] and renders
//! it as an indented tree, an interactive HTML page, a Mermaid flowchart or a
//! Graphviz DOT document.
//!
//! # Example
//!
//! ```
//! use modgraph::parser::parse_str;
//! use modgraph::render::{render_to_string, RenderFormat};
//!
//! let graph = parse_str("example.com/app example.com/lib@v1.0.0").unwrap();
//! let tree = render_to_string(RenderFormat::Text, &graph).unwrap();
//!
//! assert_eq!(tree, "example.com/app\n  └── example.com/lib@v1.0.0\n");
//! ```

pub mod graph;
pub mod parser;
pub mod render;
