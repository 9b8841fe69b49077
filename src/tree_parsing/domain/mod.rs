pub mod component;
pub mod dependency_tree;

pub use component::ComponentIdentity;
pub use dependency_tree::{DependencyTreeResult, FlattenedDependencies, LeveledDependencies};
