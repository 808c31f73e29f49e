use crate::conflict_analysis::domain::DependencyGraph;

/// AnalysisResponse - fully classified graph plus run diagnostics
///
/// The graph is final: every package carries its version count, majority
/// flag, taint and depth. When trimming ran, only survivors are visible.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub graph: DependencyGraph,
    /// Loader warnings for descriptors that were skipped
    pub warnings: Vec<String>,
    /// Passes the conflict propagator needed, including the final quiet one
    pub propagation_passes: usize,
    /// Names removed by the trimmer, in removal order (empty without trim)
    pub removed_names: Vec<String>,
    pub trimmed: bool,
}

impl AnalysisResponse {
    pub fn new(
        graph: DependencyGraph,
        warnings: Vec<String>,
        propagation_passes: usize,
        removed_names: Vec<String>,
        trimmed: bool,
    ) -> Self {
        Self {
            graph,
            warnings,
            propagation_passes,
            removed_names,
            trimmed,
        }
    }

    /// Whether any name is locked at more than one version.
    pub fn has_conflicts(&self) -> bool {
        !self.graph.multi_version_names().is_empty()
    }
}
