use crate::ports::outbound::DependencyTreeReader;
use crate::shared::error::DepTreeError;
use crate::shared::security::check_report_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Log prefix that `mvn` puts in front of every line of console output
const LOG_PREFIX: &str = "[INFO]";

/// FileSystemReader adapter for reading saved dependency tree reports
///
/// This adapter implements the DependencyTreeReader port. Lines keep their
/// leading decoration; trailing whitespace and blank lines are dropped.
///
/// A captured `mvn` console log (lines prefixed with `[INFO]`) is reduced to
/// its tree blocks when prefix stripping is on; the build chatter around
/// them is not part of the tree.
pub struct FileSystemReader {
    strip_log_prefix: bool,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            strip_log_prefix: true,
        }
    }

    /// Controls whether a leading `[INFO] ` is removed from each line
    pub fn with_strip_log_prefix(mut self, strip: bool) -> Self {
        self.strip_log_prefix = strip;
        self
    }

    fn safe_read_file(&self, path: &Path) -> Result<String> {
        check_report_file(path)?;

        let content = fs::read_to_string(path).map_err(|e| DepTreeError::InputReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(content)
    }

    /// Splits report text into tree lines
    pub fn split_lines(&self, content: &str) -> Vec<String> {
        let is_console_log = self.strip_log_prefix
            && content
                .lines()
                .any(|line| line.trim_end().starts_with(LOG_PREFIX));

        if is_console_log {
            let lines: Vec<&str> = content.lines().map(strip_log_prefix).collect();
            return extract_tree_blocks(&lines);
        }

        content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Removes `[INFO] ` (or a bare `[INFO]`) and trailing whitespace.
///
/// Exactly one space after the tag is consumed, so tree indentation survives.
fn strip_log_prefix(line: &str) -> &str {
    let line = line.trim_end();
    match line.strip_prefix(LOG_PREFIX) {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

/// `--- maven-dependency-plugin:3.6.1:tree (default-cli) @ app ---`, or the
/// shorter `--- dependency:3.6.1:tree ...` printed by Maven 3.9.
fn is_tree_goal_header(line: &str) -> bool {
    line.starts_with("--- ") && line.contains("dependency:") && line.contains(":tree")
}

/// Blank lines and `---` rules close a tree block.
fn ends_tree_block(line: &str) -> bool {
    line.is_empty() || line.starts_with("---")
}

/// An undecorated `group:artifact:type:version[...]` line, i.e. a tree root
fn is_root_coordinate(line: &str) -> bool {
    let field_count = line.split(':').count();
    !line.is_empty()
        && !line.contains(char::is_whitespace)
        && !line.starts_with(['+', '\\', '|', '-'])
        && (4..=6).contains(&field_count)
}

/// Collects the lines printed by every `dependency:tree` goal in the log.
///
/// Without any goal header the first block starting at a root coordinate is
/// taken instead.
fn extract_tree_blocks(lines: &[&str]) -> Vec<String> {
    let has_goal_header = lines.iter().any(|line| is_tree_goal_header(line));
    let mut tree_lines = Vec::new();
    let mut in_block = false;

    for line in lines {
        if in_block {
            if !ends_tree_block(line) {
                tree_lines.push(line.to_string());
                continue;
            }
            if !has_goal_header {
                break;
            }
            in_block = false;
        }

        if has_goal_header {
            in_block = is_tree_goal_header(line);
        } else if is_root_coordinate(line) {
            in_block = true;
            tree_lines.push(line.to_string());
        }
    }

    tree_lines
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeReader for FileSystemReader {
    fn read_tree_lines(&self, source: &Path) -> Result<Vec<String>> {
        if !source.exists() {
            return Err(DepTreeError::InputNotFound {
                path: source.to_path_buf(),
                suggestion: "Save the report first, e.g. `mvn dependency:tree -DoutputFile=tree.txt`, \
                             and pass its path as the INPUT argument."
                    .to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(source)?;

        Ok(self.split_lines(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_tree_lines_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tree.txt");
        fs::write(
            &path,
            "com.x:a:jar:1.0\n+- com.x:b:jar:2.0:compile\n|  \\- com.x:c:jar:3.0:compile\n",
        )
        .unwrap();

        let lines = FileSystemReader::new().read_tree_lines(&path).unwrap();

        assert_eq!(
            lines,
            vec![
                "com.x:a:jar:1.0",
                "+- com.x:b:jar:2.0:compile",
                "|  \\- com.x:c:jar:3.0:compile",
            ]
        );
    }

    #[test]
    fn test_read_tree_lines_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_tree_lines(&temp_dir.path().join("missing.txt"));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Dependency tree file not found"));
    }

    #[test]
    fn test_read_tree_lines_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_tree_lines(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read dependency tree file"));
        assert!(err_string.contains("not a regular file"));
    }

    #[test]
    fn test_split_lines_strips_log_prefix_and_blanks() {
        let content = "[INFO] com.x:a:jar:1.0\r\n[INFO] +- com.x:b:jar:2.0:compile  \n\n   \n";
        let lines = FileSystemReader::new().split_lines(content);

        assert_eq!(lines, vec!["com.x:a:jar:1.0", "+- com.x:b:jar:2.0:compile"]);
    }

    #[test]
    fn test_split_lines_keeps_prefix_when_disabled() {
        let reader = FileSystemReader::new().with_strip_log_prefix(false);
        let lines = reader.split_lines("[INFO] com.x:a:jar:1.0\n");

        assert_eq!(lines, vec!["[INFO] com.x:a:jar:1.0"]);
    }

    #[test]
    fn test_split_lines_preserves_indentation() {
        let lines = FileSystemReader::new().split_lines("   \\- com.x:c:jar:3.0\n");
        assert_eq!(lines, vec!["   \\- com.x:c:jar:3.0"]);
    }

    const CONSOLE_LOG: &str = "\
[INFO] Scanning for projects...
[INFO] 
[INFO] ----------------------< com.example:cli-tool >-----------------------
[INFO] Building cli-tool 0.3.0
[INFO] --------------------------------[ jar ]---------------------------------
[INFO] 
[INFO] --- maven-dependency-plugin:3.6.1:tree (default-cli) @ cli-tool ---
[INFO] com.example:cli-tool:jar:0.3.0
[INFO] +- info.picocli:picocli:jar:4.7.5:compile
[INFO] \\- org.junit.jupiter:junit-jupiter:jar:5.10.1:test
[INFO]    \\- org.junit.jupiter:junit-jupiter-api:jar:5.10.1:test
[INFO] ------------------------------------------------------------------------
[INFO] BUILD SUCCESS
[INFO] ------------------------------------------------------------------------
[INFO] Total time:  0.912 s
[INFO] Finished at: 2024-01-15T10:30:00+01:00
[INFO] ------------------------------------------------------------------------
";

    #[test]
    fn test_split_lines_console_log_keeps_tree_block() {
        let lines = FileSystemReader::new().split_lines(CONSOLE_LOG);

        assert_eq!(
            lines,
            vec![
                "com.example:cli-tool:jar:0.3.0",
                "+- info.picocli:picocli:jar:4.7.5:compile",
                "\\- org.junit.jupiter:junit-jupiter:jar:5.10.1:test",
                "   \\- org.junit.jupiter:junit-jupiter-api:jar:5.10.1:test",
            ]
        );
    }

    #[test]
    fn test_split_lines_console_log_parses() {
        let lines = FileSystemReader::new().split_lines(CONSOLE_LOG);
        let result = crate::tree_parsing::services::DependencyTreeParser::new()
            .parse(&lines)
            .unwrap();

        assert_eq!(
            result.dependencies_of("cli-tool"),
            vec!["junit-jupiter", "junit-jupiter-api", "picocli"]
        );
    }

    #[test]
    fn test_split_lines_short_goal_header() {
        let content = "\
[INFO] --- dependency:3.6.1:tree (default-cli) @ app ---
[INFO] com.x:app:jar:1.0
[INFO] \\- com.x:lib:jar:2.0:compile
[INFO] 
[INFO] BUILD SUCCESS
";
        let lines = FileSystemReader::new().split_lines(content);
        assert_eq!(lines, vec!["com.x:app:jar:1.0", "\\- com.x:lib:jar:2.0:compile"]);
    }

    #[test]
    fn test_split_lines_reactor_log_keeps_every_module() {
        let content = "\
[INFO] --- maven-dependency-plugin:3.6.1:tree (default-cli) @ core ---
[INFO] com.x:core:jar:1.0
[INFO] \\- com.x:util:jar:1.0:compile
[INFO] 
[INFO] --- maven-dependency-plugin:3.6.1:tree (default-cli) @ web ---
[INFO] com.x:web:jar:1.0
[INFO] \\- com.x:core:jar:1.0:compile
[INFO] ------------------------------------------------------------------------
";
        let lines = FileSystemReader::new().split_lines(content);
        assert_eq!(
            lines,
            vec![
                "com.x:core:jar:1.0",
                "\\- com.x:util:jar:1.0:compile",
                "com.x:web:jar:1.0",
                "\\- com.x:core:jar:1.0:compile",
            ]
        );
    }

    #[test]
    fn test_split_lines_without_header_starts_at_root() {
        let content = "\
[INFO] Scanning for projects...
[INFO] Total time:  0.5 s
[INFO] com.x:app:jar:1.0
[INFO] +- com.x:lib:jar:2.0:compile
[INFO] ------------------------------------------------------------------------
[INFO] Finished at: 2024-01-15T10:30:00+01:00
";
        let lines = FileSystemReader::new().split_lines(content);
        assert_eq!(lines, vec!["com.x:app:jar:1.0", "+- com.x:lib:jar:2.0:compile"]);
    }

    #[test]
    fn test_split_lines_plain_report_untouched() {
        let content = "com.x:a:jar:1.0\n\n+- com.x:b:jar:2.0:compile\n";
        let lines = FileSystemReader::new().split_lines(content);
        assert_eq!(lines, vec!["com.x:a:jar:1.0", "+- com.x:b:jar:2.0:compile"]);
    }
}
