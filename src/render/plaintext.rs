//! Plaintext tree rendering.
//!
//! Walks the graph depth-first from the root and prints one line per edge
//! with box-drawing connectors:
//!
//! ```text
//! github.com/example/main
//!   ├── github.com/dep1@v1.0.0
//!   │   └── github.com/subdep@v1.0.0
//!   └── github.com/dep2@v2.0.0
//! ```

use std::collections::HashSet;
use std::io::{self, Write};

use super::Renderer;
use crate::graph::{DependencyGraph, Module};

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";
const ROOT_INDENT: &str = "  ";

/// Plaintext tree renderer.
pub struct PlaintextRenderer;

/// A pending line in the depth-first walk.
struct Frame<'a> {
    module: &'a Module,
    prefix: String,
    is_last: bool,
    is_root: bool,
}

impl Frame<'_> {
    /// Indentation handed down to this node's children.
    fn child_prefix(&self) -> String {
        if self.is_root {
            ROOT_INDENT.to_string()
        } else if self.is_last {
            format!("{}{}", self.prefix, SPACE)
        } else {
            format!("{}{}", self.prefix, PIPE)
        }
    }
}

impl Renderer for PlaintextRenderer {
    fn render<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack = vec![Frame {
            module: graph.root(),
            prefix: String::new(),
            is_last: true,
            is_root: true,
        }];

        while let Some(frame) = stack.pop() {
            let connector = match (frame.is_root, frame.is_last) {
                (true, _) => "",
                (false, true) => CORNER,
                (false, false) => BRANCH,
            };
            writeln!(writer, "{}{}{}", frame.prefix, connector, frame.module)?;

            // Shared or cyclic nodes are printed again but not expanded again
            if !visited.insert(frame.module.canonical()) {
                continue;
            }

            let mut children = graph.direct_dependencies(frame.module);
            children.sort_unstable();

            let child_prefix = frame.child_prefix();
            let last = children.len().saturating_sub(1);
            // Pushed in reverse so the first child is popped first
            for (i, module) in children.into_iter().enumerate().rev() {
                stack.push(Frame {
                    module,
                    prefix: child_prefix.clone(),
                    is_last: i == last,
                    is_root: false,
                });
            }
        }

        Ok(())
    }
}
