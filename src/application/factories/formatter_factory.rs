use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TreeFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter that matches the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use deptree::application::dto::OutputFormat;
    /// use deptree::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn TreeFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use deptree::application::dto::OutputFormat;
    /// use deptree::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::DependencyTreeReadModelBuilder;
    use crate::tree_parsing::domain::DependencyTreeResult;

    #[test]
    fn test_create_formatters_render() {
        let model = DependencyTreeReadModelBuilder::build(&DependencyTreeResult::default(), None);

        let json = FormatterFactory::create(OutputFormat::Json).format(&model).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let markdown = FormatterFactory::create(OutputFormat::Markdown)
            .format(&model)
            .unwrap();
        assert!(markdown.starts_with("# Dependency Tree Report"));
    }

    #[test]
    fn test_progress_message_markdown() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Generating Markdown report..."
        );
    }
}
