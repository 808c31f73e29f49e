use checkdeps::adapters::outbound::console::StderrProgressReporter;
use checkdeps::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use checkdeps::application::dto::AnalysisRequest;
use checkdeps::application::factories::FormatterFactory;
use checkdeps::application::read_models::ConflictReadModelBuilder;
use checkdeps::application::use_cases::AnalyzeConflictsUseCase;
use checkdeps::cli::Args;
use checkdeps::config::{self, ConfigFile};
use checkdeps::ports::outbound::OutputPresenter;
use checkdeps::shared::error::ExitCode;
use checkdeps::shared::Result;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments.
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config_file = load_config(&args)?;
    let settings = config::merge(&args, config_file.as_ref())?;

    let use_case = AnalyzeConflictsUseCase::new(
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(AnalysisRequest::new(args.lockfile.clone(), settings.trim))?;

    let model = ConflictReadModelBuilder::build(&response, settings.base_url.as_deref());

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let rendered = FormatterFactory::create(settings.format).format(&model)?;

    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&rendered)?;

    if settings.check && response.has_conflicts() {
        eprintln!(
            "❌ {} crate(s) locked at more than one version: {}",
            model.summary.multi_version_names.len(),
            model.summary.multi_version_names.join(", ")
        );
        return Ok(ExitCode::ConflictsDetected);
    }
    Ok(ExitCode::Success)
}

/// Explicit `--config` must exist; otherwise look next to the lockfile.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&args.lockfile),
    }
}
