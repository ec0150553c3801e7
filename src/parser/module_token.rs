//! Parsing of a single `path[@version]` token.

use std::str::FromStr;

use crate::graph::Module;

/// Errors for a single module token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModuleError {
    /// The token was an empty string.
    #[error("empty module string")]
    Empty,

    /// Nothing precedes the version separator (the token began with `@`).
    #[error("empty module path")]
    EmptyPath,
}

/// Parses a module token.
///
/// The version separator is the last `@`, so a path that itself contains `@`
/// is kept intact. A token without `@` is an unversioned module. The version
/// may be empty and is otherwise not validated.
///
/// # Example
///
/// ```
/// use modgraph::parser::parse_module;
///
/// let module = parse_module("github.com/example@test/module@v1.2.3").unwrap();
/// assert_eq!(module.path(), "github.com/example@test/module");
/// assert_eq!(module.version(), "v1.2.3");
/// ```
pub fn parse_module(token: &str) -> Result<Module, ModuleError> {
    if token.is_empty() {
        return Err(ModuleError::Empty);
    }

    match token.rsplit_once('@') {
        None => Ok(Module::unversioned(token)),
        Some(("", _)) => Err(ModuleError::EmptyPath),
        Some((path, version)) => Ok(Module::new(path, version)),
    }
}

impl FromStr for Module {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_module(s)
    }
}
