//! Rendering of dependency graphs.
//!
//! This module provides renderers for four output formats: an indented
//! plaintext tree, an interactive HTML page, a Mermaid flowchart and a
//! Graphviz DOT document. Every renderer is stateless and writes its output
//! to any [`Write`] sink; sink errors are returned unchanged.

pub mod graphviz;
pub mod html;
pub mod mermaid;
pub mod plaintext;

use std::io::{self, Write};

use tracing::debug;

use crate::graph::DependencyGraph;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Indented tree for the terminal
    Text,
    /// Self-contained HTML page with a force-directed graph
    Html,
    /// Mermaid flowchart markup
    Mermaid,
    /// Graphviz DOT markup
    Dot,
}

impl RenderFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [RenderFormat; 4] = [
        RenderFormat::Text,
        RenderFormat::Html,
        RenderFormat::Mermaid,
        RenderFormat::Dot,
    ];
}

impl std::str::FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plaintext" | "tree" => Ok(RenderFormat::Text),
            "html" | "d3" => Ok(RenderFormat::Html),
            "mermaid" | "mmd" => Ok(RenderFormat::Mermaid),
            "dot" | "graphviz" => Ok(RenderFormat::Dot),
            _ => Err(format!(
                "unsupported output format: {} (supported: text, html, mermaid, dot)",
                s
            )),
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Text => write!(f, "text"),
            RenderFormat::Html => write!(f, "html"),
            RenderFormat::Mermaid => write!(f, "mermaid"),
            RenderFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Trait for renderers.
pub trait Renderer {
    /// Render the graph to the given writer.
    fn render<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()>;
}

/// Render the graph in the specified format.
pub fn render<W: Write>(
    format: RenderFormat,
    graph: &DependencyGraph,
    writer: &mut W,
) -> io::Result<()> {
    debug!(
        %format,
        modules = graph.module_count(),
        edges = graph.edge_count(),
        "rendering graph"
    );
    match format {
        RenderFormat::Text => plaintext::PlaintextRenderer.render(graph, writer),
        RenderFormat::Html => html::HtmlRenderer.render(graph, writer),
        RenderFormat::Mermaid => mermaid::MermaidRenderer.render(graph, writer),
        RenderFormat::Dot => graphviz::GraphvizRenderer.render(graph, writer),
    }
}

/// Render the graph to a string.
pub fn render_to_string(format: RenderFormat, graph: &DependencyGraph) -> io::Result<String> {
    let mut buffer = Vec::new();
    render(format, graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Escape a label for a double-quoted string.
///
/// Backslashes are escaped before quotes so an inserted escape is never
/// itself escaped again.
pub(crate) fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};

    use crate::graph::{DependencyGraph, Module};

    /// root -> dep1, root -> dep2, dep1 -> subdep
    pub fn sample_graph() -> DependencyGraph {
        let main = Module::unversioned("github.com/example/main");
        let dep1 = Module::new("github.com/dep1", "v1.0.0");
        let dep2 = Module::new("github.com/dep2", "v2.0.0");
        let subdep = Module::new("github.com/subdep", "v1.0.0");

        let mut graph = DependencyGraph::new(main.clone());
        graph.add_dependency(main.clone(), dep1.clone());
        graph.add_dependency(main, dep2);
        graph.add_dependency(dep1, subdep);
        graph
    }

    /// A sink that accepts `budget` bytes and then fails every write.
    pub struct FailingWriter {
        pub budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
