//! Graph module for dependency relationship modeling.
//!
//! This module provides the [`Module`] and [`Dependency`] value types and the
//! [`DependencyGraph`] store built from them.
//!
//! # Example
//!
//! ```rust
//! use modgraph::graph::{DependencyGraph, Module};
//!
//! let main = Module::unversioned("github.com/example/main");
//! let mut graph = DependencyGraph::new(main.clone());
//! graph.add_dependency(main, Module::new("golang.org/x/text", "v0.3.0"));
//!
//! assert_eq!(graph.module_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod dependency_graph;
mod module;

pub use dependency_graph::DependencyGraph;
pub use module::{Dependency, Module};
