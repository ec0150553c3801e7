//! Mermaid flowchart rendering.

use std::collections::HashMap;
use std::io::{self, Write};

use super::Renderer;
use crate::graph::DependencyGraph;

/// Mermaid renderer implementation.
///
/// Modules get short identifiers `N1`, `N2`, ... in sorted module order, so
/// the same graph always yields the same document.
pub struct MermaidRenderer;

/// Mermaid reads labels literally apart from the closing quote, so only `"`
/// is escaped.
fn escape_label(label: &str) -> String {
    label.replace('"', "\\\"")
}

impl Renderer for MermaidRenderer {
    fn render<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "graph TD")?;

        let modules = graph.all_modules();
        let mut ids: HashMap<&str, String> = HashMap::with_capacity(modules.len());
        for (i, module) in modules.iter().enumerate() {
            let id = format!("N{}", i + 1);
            writeln!(
                writer,
                "    {}[\"{}\"]",
                id,
                escape_label(module.canonical())
            )?;
            ids.insert(module.canonical(), id);
        }

        for (from, to) in graph.dependencies() {
            writeln!(
                writer,
                "    {} --> {}",
                ids[from.canonical()],
                ids[to.canonical()]
            )?;
        }

        Ok(())
    }
}
