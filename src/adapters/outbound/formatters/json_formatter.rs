use crate::application::read_models::PrerequisiteReadModel;
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the read model as pretty-printed JSON
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

impl ResultFormatter for JsonFormatter {
    fn format(&self, model: &PrerequisiteReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
