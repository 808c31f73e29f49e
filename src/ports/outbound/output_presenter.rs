use crate::shared::Result;

/// OutputPresenter port for delivering rendered output
///
/// Implementations decide where a finished report, dot graph or JSON
/// document ends up (stdout, a file on disk, a test buffer).
pub trait OutputPresenter {
    /// Delivers the rendered document
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, for example
    /// because its parent directory is missing or not writable.
    fn present(&self, content: &str) -> Result<()>;
}
