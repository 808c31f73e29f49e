/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, renderers).
pub mod conflict_formatter;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use conflict_formatter::ConflictFormatter;
pub use lockfile_reader::LockfileReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
