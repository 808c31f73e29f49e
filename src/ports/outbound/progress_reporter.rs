/// ProgressReporter port for diagnostics emitted while analysing
///
/// Diagnostics never go to the output destination: with `--dot` the
/// rendered graph must stay clean on stdout, so adapters write elsewhere
/// (stderr for the CLI, an in-memory log for tests).
pub trait ProgressReporter {
    /// Reports an informational message, such as a removed package name
    fn report(&self, message: &str);

    /// Reports that `current` of `total` pipeline stages have finished
    ///
    /// # Arguments
    /// * `current` - Stages completed so far
    /// * `total` - Number of stages in the pipeline
    /// * `message` - Name of the stage that just finished
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem, such as an unparsable dependency
    /// descriptor that was skipped
    fn report_error(&self, message: &str);

    /// Reports that the analysis finished
    fn report_completion(&self, message: &str);
}
