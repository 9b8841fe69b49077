use std::path::Path;
use deptree::prelude::*;

/// Mock DependencyTreeReader serving canned lines
pub struct MockTreeReader {
    pub lines: Vec<String>,
    pub should_fail: bool,
}

impl MockTreeReader {
    pub fn new(content: &str) -> Self {
        Self {
            lines: content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(String::from)
                .collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            lines: Vec::new(),
            should_fail: true,
        }
    }
}

impl DependencyTreeReader for MockTreeReader {
    fn read_tree_lines(&self, _source: &Path) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock tree read failure");
        }
        Ok(self.lines.clone())
    }
}
