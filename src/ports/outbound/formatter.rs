use crate::application::read_models::DependencyTreeReadModel;
use crate::shared::Result;

/// TreeFormatter port for rendering a parsed dependency tree
///
/// This port abstracts the output syntax (JSON, Markdown, etc.).
pub trait TreeFormatter {
    /// Formats the read model into the final report text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &DependencyTreeReadModel) -> Result<String>;
}
