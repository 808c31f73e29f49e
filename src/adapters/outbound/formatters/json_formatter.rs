use crate::application::read_models::ConflictReadModel;
use crate::ports::outbound::ConflictFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter serializing the whole read model
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

impl ConflictFormatter for JsonFormatter {
    fn format(&self, model: &ConflictReadModel) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(model).context("Failed to serialize analysis to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
