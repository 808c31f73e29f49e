/// Formatter adapters for the supported output formats
mod dot_formatter;
mod json_formatter;
mod report_formatter;

pub use dot_formatter::DotFormatter;
pub use json_formatter::JsonFormatter;
pub use report_formatter::ReportFormatter;
