use crate::application::read_models::PrerequisiteReadModel;
use crate::shared::Result;

/// ResultFormatter port for rendering the query result
pub trait ResultFormatter {
    /// Formats the read model into the text written to stdout
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &PrerequisiteReadModel) -> Result<String>;
}
