use crate::application::read_models::{DependencyTreeReadModel, DependencyView, LevelView, SummaryView};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

const LEVEL_TABLE_HEADER: &str = "| Component | Version |\n";
const LEVEL_TABLE_SEPARATOR: &str = "|-----------|---------|\n";

const DEPENDENCY_TABLE_HEADER: &str = "| Component | Depends On |\n";
const DEPENDENCY_TABLE_SEPARATOR: &str = "|-----------|------------|\n";

/// MarkdownFormatter adapter for a human-readable dependency report
///
/// Renders a summary, one table per depth level (shallowest first, which is
/// also the bootstrap order) and the flattened dependency relation.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, source: Option<&str>) {
        output.push_str("# Dependency Tree Report\n\n");
        if let Some(source) = source {
            output.push_str(&format!("Source: `{}`\n\n", source));
        }
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Count |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Levels | {} |\n", summary.levels));
        output.push_str(&format!("| Components | {} |\n", summary.components));
        output.push_str(&format!("| Dependency relations | {} |\n", summary.relations));
        output.push('\n');
    }

    fn render_levels(&self, output: &mut String, levels: &[LevelView]) {
        output.push_str("## Levels\n\n");
        output.push_str("Components grouped by tree depth. Shallower levels are resolved first.\n\n");

        if levels.is_empty() {
            output.push_str("*No components found.*\n\n");
            return;
        }

        for level in levels {
            output.push_str(&format!("### Level {}\n\n", level.depth));
            if level.components.is_empty() {
                output.push_str("*No components at this level.*\n\n");
                continue;
            }
            output.push_str(LEVEL_TABLE_HEADER);
            output.push_str(LEVEL_TABLE_SEPARATOR);
            for component in &level.components {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(&component.name),
                    Self::escape_markdown_table_cell(&component.version)
                ));
            }
            output.push('\n');
        }
    }

    fn render_dependencies(&self, output: &mut String, dependencies: &[DependencyView]) {
        output.push_str("## Flattened Dependencies\n\n");
        output.push_str("Every component with the direct and transitive dependencies found beneath it.\n\n");

        if dependencies.is_empty() {
            output.push_str("*No dependency relations found.*\n");
            return;
        }

        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for entry in dependencies {
            let depends_on = entry
                .depends_on
                .iter()
                .map(|name| Self::escape_markdown_table_cell(name))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.component),
                depends_on
            ));
        }
    }
}

impl TreeFormatter for MarkdownFormatter {
    fn format(&self, model: &DependencyTreeReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, model.source.as_deref());
        self.render_summary(&mut output, &model.summary);
        self.render_levels(&mut output, &model.levels);
        self.render_dependencies(&mut output, &model.dependencies);
        Ok(output)
    }
}
