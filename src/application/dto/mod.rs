/// Data Transfer Objects for application layer
///
/// DTOs carry requests into and results out of the use case, keeping the
/// CLI and the renderers apart from the analysis services.
mod analysis_request;
mod analysis_response;
mod output_format;

pub use analysis_request::AnalysisRequest;
pub use analysis_response::AnalysisResponse;
pub use output_format::OutputFormat;
