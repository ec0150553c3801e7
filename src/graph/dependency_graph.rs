//! Dependency graph implementation using petgraph.
//!
//! Modules are nodes and dependencies are edges of a `DiGraph`. Edges are
//! never merged, so parallel edges from duplicate input lines survive, and
//! petgraph numbers them in insertion order.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::module::Module;

/// A directed graph of module dependencies.
///
/// Edges point from the dependent module to its dependency and are kept in
/// insertion order. Modules are looked up by canonical string.
///
/// # Example
///
/// ```rust
/// use modgraph::graph::{DependencyGraph, Module};
///
/// let main = Module::unversioned("github.com/example/main");
/// let dep1 = Module::new("github.com/dep1", "v1.0.0");
/// let dep2 = Module::new("github.com/dep2", "v2.0.0");
///
/// let mut graph = DependencyGraph::new(main.clone());
/// graph.add_dependency(main.clone(), dep1.clone());
/// graph.add_dependency(main.clone(), dep2);
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.direct_dependencies(&main).len(), 2);
/// assert_eq!(graph.all_modules().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// The underlying directed graph
    graph: DiGraph<Module, ()>,
    /// Maps canonical strings to their node indices for O(1) lookup
    node_indices: HashMap<String, NodeIndex>,
    /// Node of the module under analysis
    root: NodeIndex,
}

impl DependencyGraph {
    /// Creates a graph rooted at `root` with no edges.
    ///
    /// The root is a node from the start, so it is part of the module set
    /// even before any edge mentions it.
    pub fn new(root: Module) -> Self {
        Self::with_capacity(root, 0)
    }

    /// Creates a graph with room for `edges` dependencies.
    ///
    /// # Arguments
    ///
    /// * `root` - The module under analysis
    /// * `edges` - Expected number of edges
    pub fn with_capacity(root: Module, edges: usize) -> Self {
        let mut graph = DiGraph::with_capacity(edges + 1, edges);
        let mut node_indices = HashMap::with_capacity(edges + 1);
        let key = root.canonical().to_string();
        let root = graph.add_node(root);
        node_indices.insert(key, root);
        Self {
            graph,
            node_indices,
            root,
        }
    }

    /// Returns the node for `module`, adding it if it is not in the graph yet.
    fn ensure_node(&mut self, module: Module) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(module.canonical()) {
            return idx;
        }
        let key = module.canonical().to_string();
        let idx = self.graph.add_node(module);
        self.node_indices.insert(key, idx);
        idx
    }

    /// Appends an edge `from -> to`.
    ///
    /// Duplicate edges are kept as parallel edges.
    pub fn add_dependency(&mut self, from: Module, to: Module) {
        let from = self.ensure_node(from);
        let to = self.ensure_node(to);
        self.graph.add_edge(from, to, ());
    }

    /// Returns the root module.
    pub fn root(&self) -> &Module {
        &self.graph[self.root]
    }

    /// Returns every edge as `(from, to)` in insertion order.
    pub fn dependencies(&self) -> impl Iterator<Item = (&Module, &Module)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }

    /// Returns the number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the direct dependencies of `module`, in insertion order.
    ///
    /// Matching is by canonical string, so any `Module` value with the same
    /// path and version finds the same edges. A module that is not in the
    /// graph has none.
    pub fn direct_dependencies(&self, module: &Module) -> Vec<&Module> {
        let Some(&idx) = self.node_indices.get(module.canonical()) else {
            return Vec::new();
        };

        // petgraph walks outgoing edges newest first
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges(idx)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        edges.sort_unstable_by_key(|&(id, _)| id);
        edges.into_iter().map(|(_, to)| &self.graph[to]).collect()
    }

    /// Returns every distinct module in the graph, sorted by canonical string.
    ///
    /// The root is always included. The ordering is stable across calls, so
    /// indices assigned from it agree between separate passes over the same
    /// graph.
    pub fn all_modules(&self) -> Vec<&Module> {
        let mut modules: Vec<&Module> = self.graph.node_weights().collect();
        modules.sort_unstable();
        modules
    }

    /// Returns the number of distinct modules, root included.
    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the adjacency index: each module with outgoing edges mapped to
    /// the canonical strings of its direct dependencies, in insertion order.
    ///
    /// Built in one pass over the current edges, so it always reflects every
    /// `add_dependency` made so far.
    pub fn adjacency(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (from, to) in self.dependencies() {
            adjacency
                .entry(from.canonical())
                .or_default()
                .push(to.canonical());
        }
        adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> DependencyGraph {
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

    fn names(modules: Vec<&Module>) -> Vec<&str> {
        modules.into_iter().map(Module::canonical).collect()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = DependencyGraph::new(Module::unversioned("root"));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.dependencies().count(), 0);
        assert!(graph.adjacency().is_empty());
    }

    #[test]
    fn test_root_always_in_module_set() {
        let graph = DependencyGraph::new(Module::unversioned("root"));
        let modules = graph.all_modules();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].canonical(), "root");
        assert_eq!(graph.module_count(), 1);
    }

    #[test]
    fn test_direct_dependencies_in_insertion_order() {
        let graph = sample_graph();
        let main = Module::unversioned("github.com/example/main");

        assert_eq!(
            names(graph.direct_dependencies(&main)),
            vec!["github.com/dep1@v1.0.0", "github.com/dep2@v2.0.0"]
        );
    }

    #[test]
    fn test_direct_dependencies_keep_insertion_order_when_unsorted() {
        let root = Module::unversioned("root");
        let mut graph = DependencyGraph::new(root.clone());
        for name in ["zeta", "alpha", "mid"] {
            graph.add_dependency(root.clone(), Module::new(name, "v1"));
        }

        assert_eq!(
            names(graph.direct_dependencies(&root)),
            vec!["zeta@v1", "alpha@v1", "mid@v1"]
        );
        assert_eq!(graph.adjacency()["root"], vec!["zeta@v1", "alpha@v1", "mid@v1"]);
    }

    #[test]
    fn test_direct_dependencies_of_leaf() {
        let graph = sample_graph();
        let leaf = Module::new("github.com/subdep", "v1.0.0");
        assert!(graph.direct_dependencies(&leaf).is_empty());
    }

    #[test]
    fn test_direct_dependencies_of_unknown_module() {
        let graph = sample_graph();
        assert!(graph
            .direct_dependencies(&Module::new("github.com/dep1", "v9.9.9"))
            .is_empty());
    }

    #[test]
    fn test_all_modules_sorted_and_deduplicated() {
        let graph = sample_graph();
        assert_eq!(
            names(graph.all_modules()),
            vec![
                "github.com/dep1@v1.0.0",
                "github.com/dep2@v2.0.0",
                "github.com/example/main",
                "github.com/subdep@v1.0.0",
            ]
        );
    }

    #[test]
    fn test_all_modules_is_stable() {
        let graph = sample_graph();
        assert_eq!(graph.all_modules(), graph.all_modules());
    }

    #[test]
    fn test_dependencies_in_insertion_order() {
        let graph = sample_graph();
        let edges: Vec<_> = graph
            .dependencies()
            .map(|(from, to)| (from.canonical(), to.canonical()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("github.com/example/main", "github.com/dep1@v1.0.0"),
                ("github.com/example/main", "github.com/dep2@v2.0.0"),
                ("github.com/dep1@v1.0.0", "github.com/subdep@v1.0.0"),
            ]
        );
    }

    #[test]
    fn test_duplicate_edges_preserved() {
        let a = Module::unversioned("a");
        let b = Module::new("b", "v1");

        let mut graph = DependencyGraph::new(a.clone());
        graph.add_dependency(a.clone(), b.clone());
        graph.add_dependency(a.clone(), b.clone());

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.direct_dependencies(&a).len(), 2);
        assert_eq!(graph.adjacency()["a"], vec!["b@v1", "b@v1"]);
        assert_eq!(graph.module_count(), 2);
    }

    #[test]
    fn test_adjacency_tracks_every_mutation() {
        let a = Module::unversioned("a");
        let mut graph = DependencyGraph::new(a.clone());
        graph.add_dependency(a.clone(), Module::new("b", "v1"));
        assert_eq!(graph.adjacency()["a"].len(), 1);

        graph.add_dependency(a.clone(), Module::new("c", "v1"));
        graph.add_dependency(Module::new("c", "v1"), Module::new("d", "v1"));

        let adjacency = graph.adjacency();
        assert_eq!(adjacency["a"], vec!["b@v1", "c@v1"]);
        assert_eq!(adjacency["c@v1"], vec!["d@v1"]);
        assert!(!adjacency.contains_key("d@v1"));
        assert_eq!(adjacency.len(), 2);
    }

    #[test]
    fn test_module_count_matches_distinct_endpoints() {
        let root = Module::unversioned("root");
        let mut graph = DependencyGraph::new(root.clone());
        graph.add_dependency(Module::new("x", "v1"), Module::new("y", "v1"));
        graph.add_dependency(Module::new("x", "v1"), Module::new("y", "v1"));
        graph.add_dependency(Module::new("y", "v1"), Module::new("x", "v1"));

        // root + x@v1 + y@v1
        assert_eq!(graph.module_count(), 3);
        assert_eq!(graph.all_modules().len(), 3);
    }

    #[test]
    fn test_root_edge_reuses_root_node() {
        let root = Module::unversioned("root");
        let mut graph = DependencyGraph::new(root.clone());
        graph.add_dependency(Module::unversioned("root"), Module::new("a", "v1"));

        assert_eq!(graph.module_count(), 2);
        assert_eq!(names(graph.direct_dependencies(graph.root())), vec!["a@v1"]);
    }
}
