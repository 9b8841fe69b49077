use std::path::PathBuf;

/// ParseRequest - request DTO for the dependency tree use case
#[derive(Debug, Clone)]
pub struct ParseRequest {
    /// Path of the saved dependency tree report
    pub input_path: PathBuf,
    /// Reject lines whose depth grows by more than one level
    pub strict_levels: bool,
}

impl ParseRequest {
    pub fn new(input_path: PathBuf, strict_levels: bool) -> Self {
        Self {
            input_path,
            strict_levels,
        }
    }
}
