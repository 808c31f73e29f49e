//! Builder for constructing ConflictReadModel from an analysis response

use super::conflict_read_model::{ConflictReadModel, FindingView, SummaryView};
use super::graph_view::{ClusterView, EdgeView, NodeView};
use crate::application::dto::AnalysisResponse;
use crate::conflict_analysis::domain::{DependencyGraph, NodeCategory, Package};
use crate::conflict_analysis::policies::{PackageLinkPolicy, PresentationPolicy};
use std::collections::HashSet;

/// Builder for constructing ConflictReadModel from the classified graph
///
/// Applies [`PresentationPolicy`] to every node and edge and
/// [`PackageLinkPolicy`] to every node and cluster.
pub struct ConflictReadModelBuilder;

impl ConflictReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `response` - Result of the analysis use case
    /// * `base_url` - Link prefix for workspace crates
    pub fn build(response: &AnalysisResponse, base_url: Option<&str>) -> ConflictReadModel {
        let graph = &response.graph;
        ConflictReadModel {
            summary: Self::build_summary(response),
            nodes: graph
                .packages()
                .map(|pkg| Self::build_node(pkg, base_url))
                .collect(),
            edges: Self::build_edges(graph),
            clusters: Self::build_clusters(graph, base_url),
            findings: Self::build_findings(graph),
        }
    }

    fn build_summary(response: &AnalysisResponse) -> SummaryView {
        let graph = &response.graph;
        SummaryView {
            package_count: graph.package_count(),
            name_count: graph.name_count(),
            edge_count: graph.edge_count(),
            multi_version_names: graph
                .multi_version_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            propagation_passes: response.propagation_passes,
            trimmed: response.trimmed,
            removed_names: response.removed_names.clone(),
        }
    }

    fn build_node(pkg: &Package, base_url: Option<&str>) -> NodeView {
        NodeView {
            id: pkg.id(),
            name: pkg.name().to_string(),
            version: pkg.version().to_string(),
            source: pkg.source().to_string(),
            is_workspace: pkg.source().is_workspace(),
            category: PresentationPolicy::node_category(pkg),
            link: PackageLinkPolicy::link(pkg, true, base_url),
            project_link: PackageLinkPolicy::link(pkg, false, base_url),
            version_count: pkg.version_count(),
            is_majority: pkg.is_majority(),
            is_tainted: pkg.is_tainted(),
            dep_versions: pkg.dep_versions(),
        }
    }

    fn build_edges(graph: &DependencyGraph) -> Vec<EdgeView> {
        graph
            .packages()
            .flat_map(|pkg| {
                pkg.dependencies().iter().map(move |dep| {
                    let target = graph.package(dep.target());
                    EdgeView {
                        from: pkg.id(),
                        to: target.id(),
                        category: PresentationPolicy::edge_category(pkg, target),
                    }
                })
            })
            .collect()
    }

    fn build_clusters(graph: &DependencyGraph, base_url: Option<&str>) -> Vec<ClusterView> {
        let mut seen = HashSet::new();
        graph
            .packages()
            .filter(|pkg| pkg.is_multi_version() && seen.insert(pkg.name()))
            .map(|first| ClusterView {
                name: first.name().to_string(),
                project_link: PackageLinkPolicy::link(first, false, base_url),
                node_ids: graph
                    .packages()
                    .filter(|pkg| pkg.name() == first.name())
                    .map(Package::id)
                    .collect(),
            })
            .collect()
    }

    fn build_findings(graph: &DependencyGraph) -> Vec<FindingView> {
        graph
            .packages()
            .filter(|pkg| PresentationPolicy::node_category(pkg) == NodeCategory::LeveragePoint)
            .flat_map(|pkg| {
                pkg.dependencies()
                    .iter()
                    .filter(|dep| graph.package(dep.target()).is_multi_version())
                    .map(move |dep| FindingView {
                        package: pkg.name().to_string(),
                        version: pkg.version().to_string(),
                        dependency: dep.name().to_string(),
                        dependency_version: dep.version().to_string(),
                    })
            })
            .collect()
    }
}
