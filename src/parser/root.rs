//! Root module inference.
//!
//! The edge list never names the module under analysis explicitly; it is
//! recovered from the shape of the edges.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::{Dependency, Module};

/// Infers the root module from a non-empty edge list.
///
/// If exactly one distinct unversioned module appears on the `from` side, it
/// is the root. Otherwise the `from` module with the most outgoing edges
/// wins, ties going to whichever reaches the maximum first in edge order.
///
/// Returns `None` only for an empty slice.
pub fn infer_root(dependencies: &[Dependency]) -> Option<Module> {
    let mut from_counts: HashMap<&str, usize> = HashMap::new();
    let mut unversioned: Vec<&Module> = Vec::new();

    for dep in dependencies {
        *from_counts.entry(dep.from.canonical()).or_insert(0) += 1;

        if !dep.from.has_version() && !unversioned.iter().any(|m| m.path() == dep.from.path()) {
            unversioned.push(&dep.from);
        }
    }

    if let [only] = unversioned.as_slice() {
        debug!(root = %only, "root inferred as the only unversioned module");
        return Some((*only).clone());
    }

    let mut best: Option<&Module> = None;
    let mut max_count = 0;
    for dep in dependencies {
        let count = from_counts
            .get(dep.from.canonical())
            .copied()
            .unwrap_or_default();
        if count > max_count {
            max_count = count;
            best = Some(&dep.from);
        }
    }

    if let Some(root) = best {
        debug!(
            root = %root,
            edges = max_count,
            candidates = unversioned.len(),
            "root inferred as the most frequent dependent"
        );
    }
    best.cloned()
}
