//! Conflict read model aggregating everything a renderer needs

use super::graph_view::{ClusterView, EdgeView, NodeView};
use serde::Serialize;
use std::fmt;

/// Read model for one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct ConflictReadModel {
    pub summary: SummaryView,
    /// Surviving packages in lockfile order
    pub nodes: Vec<NodeView>,
    /// Edges in lockfile order of their source, then declaration order
    pub edges: Vec<EdgeView>,
    /// Multi-version names in order of first appearance
    pub clusters: Vec<ClusterView>,
    /// Conflicting dependencies pulled in by leverage points
    pub findings: Vec<FindingView>,
}

impl ConflictReadModel {
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn cluster(&self, name: &str) -> Option<&ClusterView> {
        self.clusters.iter().find(|cluster| cluster.name == name)
    }
}

/// Counts describing the analysed graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub package_count: usize,
    pub name_count: usize,
    pub edge_count: usize,
    /// Sorted names locked at more than one version
    pub multi_version_names: Vec<String>,
    pub propagation_passes: usize,
    pub trimmed: bool,
    /// Names removed by the trimmer, in removal order
    pub removed_names: Vec<String>,
}

/// A leverage point bringing in one version of a multi-version name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindingView {
    pub package: String,
    pub version: String,
    pub dependency: String,
    pub dependency_version: String,
}

impl fmt::Display for FindingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} brings in {} @ {}",
            self.package, self.version, self.dependency, self.dependency_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_display() {
        let finding = FindingView {
            package: "A".to_string(),
            version: "1".to_string(),
            dependency: "B".to_string(),
            dependency_version: "2".to_string(),
        };
        assert_eq!(finding.to_string(), "A @ 1 brings in B @ 2");
    }
}
