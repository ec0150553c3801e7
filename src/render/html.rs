//! Interactive HTML rendering.
//!
//! The page itself lives in `assets/graph.html` and is treated as a fixed
//! template with two slots, `{{NODES}}` and `{{LINKS}}`. This module only
//! produces the two JSON array fragments that fill them.

use std::collections::HashMap;
use std::io::{self, Write};

use serde::Serialize;

use super::Renderer;
use crate::graph::DependencyGraph;

/// The page template.
pub const TEMPLATE: &str = include_str!("../../assets/graph.html");

/// Slot replaced by the node array.
pub const NODES_SLOT: &str = "{{NODES}}";

/// Slot replaced by the link array.
pub const LINKS_SLOT: &str = "{{LINKS}}";

const ENTRY_SEPARATOR: &str = ",\n        ";

/// `group` value for the root module.
pub const ROOT_GROUP: u8 = 2;

/// `group` value for every other module.
pub const MODULE_GROUP: u8 = 1;

/// HTML renderer implementation.
pub struct HtmlRenderer;

/// A node entry consumed by the page script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeEntry {
    pub id: usize,
    pub name: String,
    pub group: u8,
}

/// A link entry; `source` and `target` are node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub source: usize,
    pub target: usize,
}

/// Node and link arrays for a graph.
///
/// Node ids are positions in [`DependencyGraph::all_modules`], so both arrays
/// agree on numbering.
#[derive(Debug, Clone)]
pub struct NodeLinkData {
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>,
}

impl NodeLinkData {
    /// Builds the node and link arrays for `graph`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modgraph::graph::{DependencyGraph, Module};
    /// use modgraph::render::html::NodeLinkData;
    ///
    /// let main = Module::unversioned("example.com/app");
    /// let mut graph = DependencyGraph::new(main.clone());
    /// graph.add_dependency(main, Module::new("example.com/lib", "v1.0.0"));
    ///
    /// let data = NodeLinkData::from_graph(&graph);
    /// assert_eq!(data.nodes.len(), 2);
    /// assert_eq!(data.links.len(), 1);
    ///
    /// let link = data.links[0];
    /// assert_eq!(data.nodes[link.source].name, "example.com/app");
    /// assert_eq!(data.nodes[link.target].name, "example.com/lib@v1.0.0");
    /// ```
    pub fn from_graph(graph: &DependencyGraph) -> Self {
        let modules = graph.all_modules();
        let root = graph.root();

        let nodes: Vec<NodeEntry> = modules
            .iter()
            .enumerate()
            .map(|(id, module)| NodeEntry {
                id,
                name: module.canonical().to_string(),
                group: if *module == root { ROOT_GROUP } else { MODULE_GROUP },
            })
            .collect();

        let index: HashMap<&str, usize> = modules
            .iter()
            .enumerate()
            .map(|(id, module)| (module.canonical(), id))
            .collect();

        // Every edge endpoint is in all_modules(), so the lookups cannot miss
        let links = graph
            .dependencies()
            .map(|(from, to)| LinkEntry {
                source: index[from.canonical()],
                target: index[to.canonical()],
            })
            .collect();

        Self { nodes, links }
    }

    /// The node array as it is spliced into the page.
    pub fn nodes_fragment(&self) -> io::Result<String> {
        fragment(&self.nodes)
    }

    /// The link array as it is spliced into the page.
    pub fn links_fragment(&self) -> io::Result<String> {
        fragment(&self.links)
    }
}

/// Serializes entries one per line into a JSON array.
///
/// `<` is written as `\u003c` so a module name can never close the
/// surrounding `<script>` element.
fn fragment<T: Serialize>(entries: &[T]) -> io::Result<String> {
    let parts = entries
        .iter()
        .map(|entry| {
            serde_json::to_string(entry)
                .map(|json| json.replace('<', "\\u003c"))
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        })
        .collect::<io::Result<Vec<_>>>()?;
    Ok(format!("[{}]", parts.join(ENTRY_SEPARATOR)))
}

/// Splits the template around its two slots.
fn split_template(template: &str) -> io::Result<(&str, &str, &str)> {
    let missing = |slot: &str| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("template is missing the {} slot", slot),
        )
    };
    let (head, rest) = template
        .split_once(NODES_SLOT)
        .ok_or_else(|| missing(NODES_SLOT))?;
    let (middle, tail) = rest
        .split_once(LINKS_SLOT)
        .ok_or_else(|| missing(LINKS_SLOT))?;
    Ok((head, middle, tail))
}

/// Writes `template` with both slots filled, in one pass so that text
/// inside the fragments is never substituted again.
fn fill_template<W: Write>(
    template: &str,
    nodes: &str,
    links: &str,
    writer: &mut W,
) -> io::Result<()> {
    let (head, middle, tail) = split_template(template)?;
    writer.write_all(head.as_bytes())?;
    writer.write_all(nodes.as_bytes())?;
    writer.write_all(middle.as_bytes())?;
    writer.write_all(links.as_bytes())?;
    writer.write_all(tail.as_bytes())
}

impl Renderer for HtmlRenderer {
    fn render<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        let data = NodeLinkData::from_graph(graph);
        let nodes = data.nodes_fragment()?;
        let links = data.links_fragment()?;
        fill_template(TEMPLATE, &nodes, &links, writer)
    }
}
