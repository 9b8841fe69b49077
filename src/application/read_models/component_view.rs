//! Component, level and dependency view structs for the read model

use serde::Serialize;

/// View representation of one component identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentView {
    pub name: String,
    pub version: String,
}

/// All components observed at one tree depth
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelView {
    /// 0 = shallowest level
    pub depth: usize,
    pub components: Vec<ComponentView>,
}

/// One entry of the flattened dependency relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyView {
    pub component: String,
    pub depends_on: Vec<String>,
}
