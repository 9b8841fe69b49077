use crate::application::dto::{ParseRequest, ParseResponse};
use crate::ports::outbound::{DependencyTreeReader, ProgressReporter};
use crate::shared::Result;
use crate::tree_parsing::services::DependencyTreeParser;
use anyhow::Context;

/// ParseDependencyTreeUseCase - reads a rendered tree and rebuilds its relations
///
/// # Type Parameters
/// * `R` - DependencyTreeReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ParseDependencyTreeUseCase<R, PR> {
    tree_reader: R,
    progress_reporter: PR,
}

impl<R, PR> ParseDependencyTreeUseCase<R, PR>
where
    R: DependencyTreeReader,
    PR: ProgressReporter,
{
    /// Creates a new ParseDependencyTreeUseCase with injected dependencies
    pub fn new(tree_reader: R, progress_reporter: PR) -> Self {
        Self {
            tree_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the tree cannot be read, or a wrapped
    /// `TreeParseError` if its text is malformed.
    pub fn execute(&self, request: ParseRequest) -> Result<ParseResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency tree from: {}",
            request.input_path.display()
        ));

        let lines = self.tree_reader.read_tree_lines(&request.input_path)?;

        if lines.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} contains no dependency lines.",
                request.input_path.display()
            ));
        } else {
            self.progress_reporter
                .report(&format!("✅ Read {} dependency line(s)", lines.len()));
        }

        let parser = DependencyTreeParser::new().strict_levels(request.strict_levels);
        let result = parser.parse(&lines).with_context(|| {
            format!(
                "Failed to parse dependency tree: {}",
                request.input_path.display()
            )
        })?;

        self.progress_reporter
            .report(&format!("   - Levels: {}", result.level_count()));
        self.progress_reporter
            .report(&format!("   - Components: {}", result.component_count()));
        self.progress_reporter.report(&format!(
            "   - Dependency relations: {}",
            result.relation_count()
        ));
        self.progress_reporter
            .report_completion("🌳 Dependency tree parsed");

        Ok(ParseResponse::new(result, lines.len()))
    }
}
