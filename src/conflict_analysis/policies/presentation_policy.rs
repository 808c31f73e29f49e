use crate::conflict_analysis::domain::{EdgeCategory, NodeCategory, Package};

/// PresentationPolicy maps the derived attributes of packages and edges
/// onto display categories.
///
/// Both functions are total: the first matching rule wins, and the last
/// category catches everything else.
pub struct PresentationPolicy;

impl PresentationPolicy {
    pub fn node_category(pkg: &Package) -> NodeCategory {
        let single = pkg.version_count() == 1;
        if single && pkg.dep_versions() > 1 && !pkg.is_tainted() {
            NodeCategory::LeveragePoint
        } else if pkg.is_multi_version() && !pkg.is_tainted() {
            NodeCategory::ConflictRoot
        } else if pkg.is_multi_version() {
            NodeCategory::ConflictDescendant
        } else if single && pkg.is_tainted() {
            NodeCategory::MinorityAdjacent
        } else {
            NodeCategory::Unaffected
        }
    }

    pub fn edge_category(source: &Package, target: &Package) -> EdgeCategory {
        let clean_single_source = source.version_count() == 1 && !source.is_tainted();
        if clean_single_source && target.is_multi_version() {
            if target.is_majority() {
                EdgeCategory::MajorityLink
            } else {
                EdgeCategory::MinorityLink
            }
        } else if target.is_multi_version() {
            EdgeCategory::TaintPropagation
        } else if source.is_multi_version() {
            EdgeCategory::SourceDiverges
        } else {
            EdgeCategory::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict_analysis::domain::{PackageName, SourceLocator, Version};

    fn pkg(version_count: usize, tainted: bool, majority: bool, dep_versions: usize) -> Package {
        let mut pkg = Package::new(
            PackageName::new("p".to_string()).unwrap(),
            Version::new("1.0.0".to_string()).unwrap(),
            SourceLocator::Workspace,
        );
        pkg.set_version_count(version_count);
        if tainted {
            pkg.taint();
        }
        pkg.set_majority(majority);
        pkg.set_dep_versions(dep_versions);
        pkg
    }

    #[test]
    fn test_node_categories() {
        assert_eq!(
            PresentationPolicy::node_category(&pkg(1, false, false, 2)),
            NodeCategory::LeveragePoint
        );
        assert_eq!(
            PresentationPolicy::node_category(&pkg(2, false, true, 0)),
            NodeCategory::ConflictRoot
        );
        assert_eq!(
            PresentationPolicy::node_category(&pkg(3, true, false, 5)),
            NodeCategory::ConflictDescendant
        );
        assert_eq!(
            PresentationPolicy::node_category(&pkg(1, true, false, 4)),
            NodeCategory::MinorityAdjacent
        );
        assert_eq!(
            PresentationPolicy::node_category(&pkg(1, false, false, 1)),
            NodeCategory::Unaffected
        );
        assert_eq!(
            PresentationPolicy::node_category(&pkg(1, false, false, 0)),
            NodeCategory::Unaffected
        );
    }

    #[test]
    fn test_leverage_point_requires_untainted() {
        // Tainted single-version packages are collateral, not upgrade targets.
        assert_eq!(
            PresentationPolicy::node_category(&pkg(1, true, false, 3)),
            NodeCategory::MinorityAdjacent
        );
    }

    #[test]
    fn test_edge_categories() {
        let clean = pkg(1, false, false, 2);
        let tainted_single = pkg(1, true, false, 0);
        let minority = pkg(2, false, false, 0);
        let majority = pkg(2, false, true, 0);
        let leaf = pkg(1, false, false, 0);

        assert_eq!(
            PresentationPolicy::edge_category(&clean, &minority),
            EdgeCategory::MinorityLink
        );
        assert_eq!(
            PresentationPolicy::edge_category(&clean, &majority),
            EdgeCategory::MajorityLink
        );
        assert_eq!(
            PresentationPolicy::edge_category(&tainted_single, &majority),
            EdgeCategory::TaintPropagation
        );
        assert_eq!(
            PresentationPolicy::edge_category(&minority, &majority),
            EdgeCategory::TaintPropagation
        );
        assert_eq!(
            PresentationPolicy::edge_category(&majority, &leaf),
            EdgeCategory::SourceDiverges
        );
        assert_eq!(
            PresentationPolicy::edge_category(&clean, &leaf),
            EdgeCategory::Neutral
        );
        assert_eq!(
            PresentationPolicy::edge_category(&tainted_single, &leaf),
            EdgeCategory::Neutral
        );
    }
}
