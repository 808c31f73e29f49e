use crate::conflict_analysis::domain::DependencyGraph;

/// GraphTrimmer prunes packages that cannot lead to a version conflict.
///
/// Each pass first drops every edge whose target name has been removed,
/// then removes single-version packages left without edges. Passes repeat
/// until nothing is removed. Multi-version packages always stay.
///
/// The classification attributes (`version_count`, `is_majority`,
/// `is_tainted`, `dep_versions`) are left exactly as computed on the full
/// graph.
pub struct GraphTrimmer;

impl GraphTrimmer {
    /// Returns the names removed, in removal order.
    pub fn trim(graph: &mut DependencyGraph) -> Vec<String> {
        let mut removed = Vec::new();
        let mut changed = true;
        while changed {
            changed = false;
            for index in graph.indices() {
                graph.drop_edges_to_missing_names(index);
                let pkg = graph.package(index);
                if pkg.version_count() < 2 && pkg.dependencies().is_empty() {
                    let name = pkg.name().to_string();
                    if graph.remove_name(&name) {
                        removed.push(name);
                        changed = true;
                    }
                }
            }
        }
        removed
    }
}
