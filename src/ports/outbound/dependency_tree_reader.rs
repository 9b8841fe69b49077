use crate::shared::Result;
use std::path::Path;

/// DependencyTreeReader port for obtaining dependency tree lines
///
/// This port abstracts where the rendered tree comes from (a saved report
/// file, a build tool subprocess, a test fixture). Implementations return
/// the coordinate lines in the order the tool printed them, without line
/// terminators.
pub trait DependencyTreeReader {
    /// Reads the dependency tree lines from the specified source
    ///
    /// # Arguments
    /// * `source` - Path identifying the tree to read
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist
    /// - The source cannot be read due to permissions or I/O errors
    fn read_tree_lines(&self, source: &Path) -> Result<Vec<String>>;
}
