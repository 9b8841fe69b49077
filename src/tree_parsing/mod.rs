/// Dependency tree parsing domain
///
/// Pure logic with no I/O: value types for the parse result and the
/// services that decode lines and rebuild the tree.
pub mod domain;
pub mod services;
