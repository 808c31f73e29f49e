use crate::conflict_analysis::domain::DependencyGraph;

/// DepthAnnotator records, per package, the largest version count among
/// its direct dependencies that are not a majority version (0 without such
/// dependencies).
///
/// Run after [`PopularityClassifier`](super::PopularityClassifier). Only
/// direct edges are considered.
pub struct DepthAnnotator;

impl DepthAnnotator {
    pub fn annotate(graph: &mut DependencyGraph) {
        for index in graph.indices() {
            let dep_versions = graph
                .package(index)
                .dependencies()
                .iter()
                .map(|dep| graph.package(dep.target()))
                .filter(|target| !target.is_majority())
                .map(|target| target.version_count())
                .max()
                .unwrap_or(0);
            graph.package_mut(index).set_dep_versions(dep_versions);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict_analysis::domain::PackageRecord;
    use crate::conflict_analysis::services::{GraphBuilder, PopularityClassifier};

    fn annotated(records: &[PackageRecord]) -> DependencyGraph {
        let mut graph = GraphBuilder::build(records).unwrap();
        PopularityClassifier::classify(&mut graph);
        DepthAnnotator::annotate(&mut graph);
        graph
    }

    #[test]
    fn test_no_dependencies_is_zero() {
        let graph = annotated(&[PackageRecord::new("a", "1.0.0")]);
        assert_eq!(graph.find("a", "1.0.0").unwrap().dep_versions(), 0);
    }

    #[test]
    fn test_single_version_dependencies_count_as_one() {
        let graph = annotated(&[
            PackageRecord::new("a", "1.0.0").with_dependency("b", "1.0.0"),
            PackageRecord::new("b", "1.0.0"),
        ]);
        assert_eq!(graph.find("a", "1.0.0").unwrap().dep_versions(), 1);
    }

    #[test]
    fn test_majority_dependency_is_ignored() {
        let graph = annotated(&[
            PackageRecord::new("a", "1.0.0").with_dependency("b", "2.0.0"),
            PackageRecord::new("c", "1.0.0").with_dependency("b", "2.0.0"),
            PackageRecord::new("d", "1.0.0").with_dependency("b", "1.0.0"),
            PackageRecord::new("b", "1.0.0"),
            PackageRecord::new("b", "2.0.0"),
        ]);
        assert_eq!(graph.find("a", "1.0.0").unwrap().dep_versions(), 0);
        assert_eq!(graph.find("d", "1.0.0").unwrap().dep_versions(), 2);
    }

    #[test]
    fn test_takes_largest_conflict() {
        let graph = annotated(&[
            PackageRecord::new("a", "1.0.0")
                .with_dependency("b", "1.0.0")
                .with_dependency("c", "1.0.0")
                .with_dependency("leaf", "1.0.0"),
            PackageRecord::new("b", "1.0.0"),
            PackageRecord::new("b", "2.0.0"),
            PackageRecord::new("c", "1.0.0"),
            PackageRecord::new("c", "2.0.0"),
            PackageRecord::new("c", "3.0.0"),
            PackageRecord::new("leaf", "1.0.0"),
        ]);
        // b@1 and c@1 are each the only referenced version, so they are the
        // majority; nothing else contributes more than the leaf.
        assert_eq!(graph.find("a", "1.0.0").unwrap().dep_versions(), 1);
    }

    #[test]
    fn test_tied_versions_contribute_their_version_count() {
        let graph = annotated(&[
            PackageRecord::new("a", "1.0.0")
                .with_dependency("c", "1.0.0")
                .with_dependency("b", "1.0.0"),
            PackageRecord::new("x", "1.0.0")
                .with_dependency("c", "2.0.0")
                .with_dependency("b", "2.0.0"),
            PackageRecord::new("b", "1.0.0"),
            PackageRecord::new("b", "2.0.0"),
            PackageRecord::new("c", "1.0.0"),
            PackageRecord::new("c", "2.0.0"),
            PackageRecord::new("c", "3.0.0"),
        ]);
        assert_eq!(graph.find("a", "1.0.0").unwrap().dep_versions(), 3);
        assert_eq!(graph.find("x", "1.0.0").unwrap().dep_versions(), 3);
    }
}
