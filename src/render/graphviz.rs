//! Graphviz DOT rendering.

use std::io::{self, Write};

use super::{escape_quoted, Renderer};
use crate::graph::DependencyGraph;

/// Graphviz renderer implementation.
pub struct GraphvizRenderer;

/// Sanitize a canonical module string into a DOT node identifier.
///
/// Every `/`, `.`, `@` and `-` becomes `_`.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '/' | '.' | '@' | '-' => '_',
            other => other,
        })
        .collect()
}

impl Renderer for GraphvizRenderer {
    fn render<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph dependencies {{")?;
        writeln!(writer, "    rankdir=LR;")?;
        writeln!(writer, "    node [shape=box, style=rounded];")?;

        let root = graph.root();
        for module in graph.all_modules() {
            let id = escape_quoted(&sanitize_id(module.canonical()));
            let label = escape_quoted(module.canonical());
            if module == root {
                writeln!(
                    writer,
                    "    \"{}\" [label=\"{}\", fillcolor=lightblue, style=\"rounded,filled\"];",
                    id, label
                )?;
            } else {
                writeln!(writer, "    \"{}\" [label=\"{}\"];", id, label)?;
            }
        }

        for (from, to) in graph.dependencies() {
            writeln!(
                writer,
                "    \"{}\" -> \"{}\";",
                escape_quoted(&sanitize_id(from.canonical())),
                escape_quoted(&sanitize_id(to.canonical()))
            )?;
        }

        writeln!(writer, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Module;
    use crate::render::test_support::sample_graph;

    fn render(graph: &DependencyGraph) -> String {
        let mut output = Vec::new();
        GraphvizRenderer.render(graph, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(
            sanitize_id("github.com/example/module@v1.2.3"),
            "github_com_example_module_v1_2_3"
        );
        assert_eq!(sanitize_id("golang.org/x/sys@v0.0.0-2019"), "golang_org_x_sys_v0_0_0_2019");
        assert_eq!(sanitize_id("plain"), "plain");
        assert_eq!(sanitize_id(""), "");
    }

    #[test]
    fn test_sample_document() {
        let output = render(&sample_graph());
        let expected = r#"digraph dependencies {
    rankdir=LR;
    node [shape=box, style=rounded];
    "github_com_dep1_v1_0_0" [label="github.com/dep1@v1.0.0"];
    "github_com_dep2_v2_0_0" [label="github.com/dep2@v2.0.0"];
    "github_com_example_main" [label="github.com/example/main", fillcolor=lightblue, style="rounded,filled"];
    "github_com_subdep_v1_0_0" [label="github.com/subdep@v1.0.0"];
    "github_com_example_main" -> "github_com_dep1_v1_0_0";
    "github_com_example_main" -> "github_com_dep2_v2_0_0";
    "github_com_dep1_v1_0_0" -> "github_com_subdep_v1_0_0";
}
"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn test_module_node_declared_with_sanitized_id() {
        let root = Module::unversioned("github.com/example/main");
        let module = Module::new("github.com/example/module", "v1.2.3");
        let mut graph = DependencyGraph::new(root.clone());
        graph.add_dependency(root, module);

        let output = render(&graph);
        assert!(output.contains(
            r#""github_com_example_module_v1_2_3" [label="github.com/example/module@v1.2.3"];"#
        ));
    }

    #[test]
    fn test_only_root_highlighted() {
        let output = render(&sample_graph());
        assert_eq!(output.matches("fillcolor=lightblue").count(), 1);
    }

    #[test]
    fn test_label_escaping() {
        let root = Module::unversioned(r#"odd"name\x"#);
        let mut graph = DependencyGraph::new(root.clone());
        graph.add_dependency(root, Module::new("x", "v1"));

        let output = render(&graph);
        assert!(output.contains(r#"[label="odd\"name\\x", fillcolor=lightblue"#));
    }

    #[test]
    fn test_closes_graph() {
        let output = render(&sample_graph());
        assert!(output.ends_with("}\n"));
    }
}
