use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, ReportFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ConflictFormatter;

/// Factory for creating output formatters
///
/// Keeps the choice of renderer adapter out of `main` and the use case.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the specified output format
    ///
    /// # Examples
    /// ```
    /// use checkdeps::application::dto::OutputFormat;
    /// use checkdeps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Dot);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ConflictFormatter> {
        match format {
            OutputFormat::Report => Box::new(ReportFormatter::new()),
            OutputFormat::Dot => Box::new(DotFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message shown before rendering
    ///
    /// # Examples
    /// ```
    /// use checkdeps::application::dto::OutputFormat;
    /// use checkdeps::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Dot);
    /// assert_eq!(message, "📝 Rendering Graphviz dot output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Report => "📝 Rendering conflict report...",
            OutputFormat::Dot => "📝 Rendering Graphviz dot output...",
            OutputFormat::Json => "📝 Rendering JSON output...",
        }
    }
}
