use crate::conflict_analysis::domain::DependencyGraph;

/// PopularityClassifier marks the majority version of every multi-version name.
///
/// A version is the majority when its incoming count is strictly greater
/// than that of every sibling. A tie for the highest count leaves the name
/// without a majority version. Single-version packages are never marked.
pub struct PopularityClassifier;

impl PopularityClassifier {
    pub fn classify(graph: &mut DependencyGraph) {
        for name in graph
            .multi_version_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
        {
            let siblings = graph.group_indices(&name);
            for &candidate in &siblings {
                let max_other = siblings
                    .iter()
                    .filter(|&&other| other != candidate)
                    .map(|&other| graph.package(other).incoming_count())
                    .max()
                    .unwrap_or(0);
                let is_majority = graph.package(candidate).incoming_count() > max_other;
                graph.package_mut(candidate).set_majority(is_majority);
            }
        }
    }
}
