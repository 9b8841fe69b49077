//! Dependency tree read model for report rendering

use super::component_view::{DependencyView, LevelView};
use serde::Serialize;

/// Main read model for a parsed dependency tree
///
/// Every collection is sorted so formatted output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyTreeReadModel {
    /// Where the tree was read from, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub summary: SummaryView,
    pub levels: Vec<LevelView>,
    pub dependencies: Vec<DependencyView>,
}

/// Aggregate counts over the parse result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub levels: usize,
    pub components: usize,
    pub relations: usize,
}
