//! Builder for constructing DependencyTreeReadModel from the parse result

use super::component_view::{ComponentView, DependencyView, LevelView};
use super::dependency_tree_read_model::{DependencyTreeReadModel, SummaryView};
use crate::tree_parsing::domain::DependencyTreeResult;

/// Builder that transforms a DependencyTreeResult into its read model
pub struct DependencyTreeReadModelBuilder;

impl DependencyTreeReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `result` - The parse result
    /// * `source` - Optional description of where the tree came from
    pub fn build(result: &DependencyTreeResult, source: Option<String>) -> DependencyTreeReadModel {
        DependencyTreeReadModel {
            source,
            summary: SummaryView {
                levels: result.level_count(),
                components: result.component_count(),
                relations: result.relation_count(),
            },
            levels: Self::build_levels(result),
            dependencies: Self::build_dependencies(result),
        }
    }

    fn build_levels(result: &DependencyTreeResult) -> Vec<LevelView> {
        result
            .bootstrap_order()
            .into_iter()
            .enumerate()
            .map(|(depth, components)| LevelView {
                depth,
                components: components
                    .into_iter()
                    .map(|c| ComponentView {
                        name: c.name().to_string(),
                        version: c.version().to_string(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn build_dependencies(result: &DependencyTreeResult) -> Vec<DependencyView> {
        result
            .flattened_dependencies()
            .iter()
            .map(|(component, deps)| DependencyView {
                component: component.to_string(),
                depends_on: deps.iter().cloned().collect(),
            })
            .collect()
    }
}
