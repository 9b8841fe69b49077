use crate::tree_parsing::domain::DependencyTreeResult;

/// ParseResponse - response DTO from the dependency tree use case
#[derive(Debug, Clone)]
pub struct ParseResponse {
    /// The reconstructed dependency relations
    pub result: DependencyTreeResult,
    /// Number of tree lines that were parsed
    pub line_count: usize,
}

impl ParseResponse {
    pub fn new(result: DependencyTreeResult, line_count: usize) -> Self {
        Self { result, line_count }
    }
}
