//! Module and dependency value types.
//!
//! A [`Module`] is identified by its canonical string: the path alone when no
//! version is present, `path@version` otherwise. Equality, ordering and
//! hashing all go through that form.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named, optionally versioned unit of dependency.
///
/// # Example
///
/// ```rust
/// use modgraph::graph::Module;
///
/// let main = Module::new("github.com/example/main", "");
/// let dep = Module::new("github.com/dep1", "v1.0.0");
///
/// assert_eq!(main.to_string(), "github.com/example/main");
/// assert_eq!(dep.to_string(), "github.com/dep1@v1.0.0");
/// ```
#[derive(Debug, Clone)]
pub struct Module {
    path: String,
    version: String,
    canonical: String,
}

impl Module {
    /// Creates a module from a path and a version. An empty version means
    /// "unversioned".
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        let path = path.into();
        let version = version.into();
        let canonical = if version.is_empty() {
            path.clone()
        } else {
            format!("{}@{}", path, version)
        };
        Self {
            path,
            version,
            canonical,
        }
    }

    /// Creates a module without a version.
    pub fn unversioned(path: impl Into<String>) -> Self {
        Self::new(path, "")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns true if the module carries a version.
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }

    /// The `path` or `path@version` form used for identity and display.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Module {}

impl Hash for Module {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for Module {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Module {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

/// A directed "requires" relationship: `from` depends on `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    /// The dependent module
    pub from: Module,
    /// The module being required
    pub to: Module,
}

impl Dependency {
    pub fn new(from: Module, to: Module) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}
