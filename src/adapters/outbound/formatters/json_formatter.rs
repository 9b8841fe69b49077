use crate::application::read_models::DependencyTreeReadModel;
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter - pretty-printed JSON of the read model
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for JsonFormatter {
    fn format(&self, model: &DependencyTreeReadModel) -> Result<String> {
        let mut output =
            serde_json::to_string_pretty(model).context("Failed to serialize dependency report")?;
        output.push('\n');
        Ok(output)
    }
}
