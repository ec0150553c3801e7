//! Parser for module graph edge lists.
//!
//! Each non-blank line holds two whitespace-separated module tokens,
//! `from to`, meaning "`from` requires `to`". Any malformed line aborts the
//! whole parse; no partial graph is ever returned.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace};

use super::module_token::{parse_module, ModuleError};
use super::root::infer_root;
use crate::graph::{Dependency, DependencyGraph};

/// Which token of a line failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => write!(f, "from"),
            Side::To => write!(f, "to"),
        }
    }
}

/// Why a single line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The line did not split into exactly two fields.
    #[error("expected 2 fields, got {0}")]
    FieldCount(usize),

    /// One of the two module tokens was invalid.
    #[error("failed to parse {side} module: {source}")]
    Module {
        side: Side,
        #[source]
        source: ModuleError,
    },
}

/// Errors that can occur while parsing an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A line was malformed. `line` is 1-indexed and `content` is the
    /// trimmed line text.
    #[error("parse error at line {line} ({content:?}): {cause}")]
    Line {
        line: usize,
        content: String,
        #[source]
        cause: LineError,
    },

    /// The input held no edges at all.
    #[error("no dependencies found in input")]
    Empty,

    /// Failed to read the input.
    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Returns the 1-indexed line number for line-level errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a single edge line that is already known to be non-blank.
fn parse_line(line: &str) -> Result<Dependency, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [from, to] = fields.as_slice() else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let from = parse_module(from).map_err(|source| LineError::Module {
        side: Side::From,
        source,
    })?;
    let to = parse_module(to).map_err(|source| LineError::Module {
        side: Side::To,
        source,
    })?;

    Ok(Dependency::new(from, to))
}

/// Parses an edge list from a string.
///
/// Blank lines are skipped. The root module is inferred once every line has
/// been read, then the edges are added to the graph in their original order.
///
/// # Example
///
/// ```
/// use modgraph::parser::parse_str;
///
/// let input = "github.com/example/main github.com/dep1@v1.0.0\n\
///              github.com/example/main github.com/dep2@v2.0.0\n\
///              github.com/dep1@v1.0.0 github.com/subdep@v1.0.0";
///
/// let graph = parse_str(input).unwrap();
/// assert_eq!(graph.root().canonical(), "github.com/example/main");
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.all_modules().len(), 4);
/// ```
pub fn parse_str(content: &str) -> ParseResult<DependencyGraph> {
    let mut dependencies = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            trace!(line = index + 1, "skipping blank line");
            continue;
        }

        let dep = parse_line(line).map_err(|cause| ParseError::Line {
            line: index + 1,
            content: line.to_string(),
            cause,
        })?;
        dependencies.push(dep);
    }

    let root = infer_root(&dependencies).ok_or(ParseError::Empty)?;

    let mut graph = DependencyGraph::with_capacity(root, dependencies.len());
    for dep in dependencies {
        graph.add_dependency(dep.from, dep.to);
    }

    debug!(
        root = %graph.root(),
        edges = graph.edge_count(),
        "parsed module graph"
    );
    Ok(graph)
}

/// Reads all of `reader` and parses it with [`parse_str`].
pub fn parse_reader<R: Read>(mut reader: R) -> ParseResult<DependencyGraph> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_str(&content)
}

/// Parses an edge list from a file on disk.
///
/// # Arguments
///
/// * `path` - Path to a file holding the edge list
///
/// # Returns
///
/// The parsed graph, or [`ParseError::Io`] if the file cannot be opened or read.
pub fn parse_file(path: &Path) -> ParseResult<DependencyGraph> {
    let file = File::open(path)?;
    parse_reader(file)
}
