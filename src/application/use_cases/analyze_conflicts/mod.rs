use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::conflict_analysis::domain::{DependencyGraph, PackageRecord};
use crate::conflict_analysis::services::{
    ConflictPropagator, DepthAnnotator, GraphBuilder, GraphTrimmer, LockfileParser,
    ParsedLockfile, PopularityClassifier,
};
use crate::ports::outbound::{LockfileReader, ProgressReporter};
use crate::shared::error::CheckdepsError;
use crate::shared::Result;
use std::path::Path;

/// AnalyzeConflictsUseCase - runs the conflict analysis pipeline
///
/// Stages run strictly in order: load, build, classify popularity,
/// propagate conflicts, annotate depth, then optionally trim. Each stage
/// sees the final result of the previous one.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeConflictsUseCase<LR, PR> {
    lockfile_reader: LR,
    progress_reporter: PR,
}

impl<LR, PR> AnalyzeConflictsUseCase<LR, PR>
where
    LR: LockfileReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeConflictsUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Returns an error if the lockfile cannot be read or parsed, if a
    /// package is locked twice, or if a dependency names a package that is
    /// not in the lockfile.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let stages = if request.trim { 6 } else { 5 };

        let parsed = self.load_lockfile(&request.lockfile_path)?;
        self.progress_reporter
            .report_progress(1, stages, Some("lockfile parsed"));

        let mut graph = Self::build_graph(&request.lockfile_path, &parsed.records)?;
        self.progress_reporter
            .report_progress(2, stages, Some("graph built"));

        PopularityClassifier::classify(&mut graph);
        self.progress_reporter
            .report_progress(3, stages, Some("versions classified"));

        let passes = ConflictPropagator::propagate(&mut graph);
        self.progress_reporter
            .report_progress(4, stages, Some("conflicts propagated"));

        DepthAnnotator::annotate(&mut graph);
        self.progress_reporter
            .report_progress(5, stages, Some("depth annotated"));

        self.report_classification(&graph, passes);

        let removed_names = if request.trim {
            let removed = self.trim(&mut graph);
            self.progress_reporter
                .report_progress(6, stages, Some("graph trimmed"));
            removed
        } else {
            Vec::new()
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Analysis complete: {} package(s) in the graph",
            graph.package_count()
        ));

        Ok(AnalysisResponse::new(
            graph,
            parsed.warnings,
            passes,
            removed_names,
            request.trim,
        ))
    }

    /// Reads and parses the lockfile, surfacing descriptor warnings
    fn load_lockfile(&self, path: &Path) -> Result<ParsedLockfile> {
        self.progress_reporter
            .report(&format!("📖 Loading Cargo.lock from: {}", path.display()));

        let content = self.lockfile_reader.read_lockfile(path)?;
        let parsed =
            LockfileParser::parse(&content).map_err(|e| CheckdepsError::LockfileParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            })?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", parsed.records.len()));
        for warning in &parsed.warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }
        Ok(parsed)
    }

    /// Builds the graph; record validation failures become parse errors,
    /// while an inconsistent lockfile keeps its own error.
    fn build_graph(path: &Path, records: &[PackageRecord]) -> Result<DependencyGraph> {
        GraphBuilder::build(records).map_err(|e| {
            if matches!(
                e.downcast_ref::<CheckdepsError>(),
                Some(CheckdepsError::UnresolvedDependency { .. })
            ) {
                return e;
            }
            CheckdepsError::LockfileParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }

    fn report_classification(&self, graph: &DependencyGraph, passes: usize) {
        let names = graph.multi_version_names();
        if names.is_empty() {
            self.progress_reporter
                .report("✅ Every crate is locked at a single version");
        } else {
            self.progress_reporter.report(&format!(
                "🔀 {} crate(s) locked at more than one version: {}",
                names.len(),
                names.join(", ")
            ));
        }
        self.progress_reporter.report(&format!(
            "🔁 Conflict propagation settled after {} pass(es)",
            passes
        ));
    }

    fn trim(&self, graph: &mut DependencyGraph) -> Vec<String> {
        let removed = GraphTrimmer::trim(graph);
        for name in &removed {
            self.progress_reporter
                .report(&format!("removing {} from the graph", name));
        }
        removed
    }
}
