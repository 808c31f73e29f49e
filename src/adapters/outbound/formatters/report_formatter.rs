use crate::application::read_models::ConflictReadModel;
use crate::ports::outbound::ConflictFormatter;
use crate::shared::Result;

/// ReportFormatter adapter for the plain-text report
///
/// One line per conflicting dependency of each leverage point:
/// `<name> @ <version> brings in <dep-name> @ <dep-version>`.
/// A graph without leverage points renders as an empty string.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConflictFormatter for ReportFormatter {
    fn format(&self, model: &ConflictReadModel) -> Result<String> {
        let mut output = String::new();
        for finding in &model.findings {
            output.push_str(&finding.to_string());
            output.push('\n');
        }
        Ok(output)
    }
}
