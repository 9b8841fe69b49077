use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a rejected dependency tree
/// from usage mistakes and environment failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the tree was parsed and the report written
    Success = 0,
    /// The dependency tree text was malformed
    MalformedTree = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, config file, output error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error propagated out of `run`.
    pub fn for_error(error: &anyhow::Error) -> Self {
        if error.downcast_ref::<TreeParseError>().is_some() {
            ExitCode::MalformedTree
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::MalformedTree => write!(f, "Malformed Tree (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while reconstructing a dependency tree from its text form.
///
/// Every variant is fatal: the parse is aborted and no partial result is
/// returned. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeParseError {
    #[error("Format of the dependency line {line_number} '{line}' is incorrect. Found {field_count} fields instead of 4, 5 or 6")]
    MalformedLine {
        line_number: usize,
        line: String,
        field_count: usize,
    },

    #[error("Dependency line {line_number} closes {requested} level(s) but only {available} are open")]
    StackUnderflow {
        line_number: usize,
        requested: usize,
        available: usize,
    },

    #[error("Dependency line {line_number} jumps from level {from} to level {to}; levels may only increase one at a time")]
    LevelSkip {
        line_number: usize,
        from: usize,
        to: usize,
    },
}

/// Application-specific errors for dependency tree processing.
#[derive(Debug, Error)]
pub enum DepTreeError {
    #[error("Dependency tree file not found: {path}\n\n💡 Hint: {suggestion}")]
    InputNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read dependency tree file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    InputReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Dependency tree report is too large: {path} ({size} bytes, limit is {limit_mb} MB)\n\n💡 Hint: Save only the tree with `mvn dependency:tree -DoutputFile=tree.txt` instead of a full build log")]
    ReportTooLarge {
        path: PathBuf,
        size: u64,
        limit_mb: u64,
    },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::MalformedTree.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::MalformedTree), "Malformed Tree (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_parse_error() {
        let err: anyhow::Error = TreeParseError::StackUnderflow {
            line_number: 3,
            requested: 2,
            available: 1,
        }
        .into();
        assert_eq!(ExitCode::for_error(&err), ExitCode::MalformedTree);
    }

    #[test]
    fn test_exit_code_for_wrapped_parse_error() {
        let err = anyhow::Error::from(TreeParseError::MalformedLine {
            line_number: 1,
            line: "a:b".to_string(),
            field_count: 2,
        })
        .context("Failed to parse dependency tree");
        assert_eq!(ExitCode::for_error(&err), ExitCode::MalformedTree);
    }

    #[test]
    fn test_exit_code_for_other_error() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_malformed_line_display() {
        let error = TreeParseError::MalformedLine {
            line_number: 4,
            line: "com.x:a:jar".to_string(),
            field_count: 3,
        };
        let display = error.to_string();
        assert!(display.contains("com.x:a:jar"));
        assert!(display.contains("Found 3"));
        assert!(display.contains("line 4"));
    }

    #[test]
    fn test_stack_underflow_display() {
        let error = TreeParseError::StackUnderflow {
            line_number: 2,
            requested: 3,
            available: 0,
        };
        let display = error.to_string();
        assert!(display.contains("closes 3 level(s)"));
        assert!(display.contains("only 0 are open"));
    }

    #[test]
    fn test_input_not_found_display() {
        let error = DepTreeError::InputNotFound {
            path: PathBuf::from("/test/tree.txt"),
            suggestion: "Run mvn dependency:tree first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Dependency tree file not found"));
        assert!(display.contains("/test/tree.txt"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Run mvn dependency:tree first"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = DepTreeError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = DepTreeError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
