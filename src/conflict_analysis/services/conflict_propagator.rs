use crate::conflict_analysis::domain::{DependencyGraph, Package};

/// ConflictPropagator computes which packages sit beneath a version conflict.
///
/// For an edge P -> D, D becomes tainted when P is tainted, or when P has
/// several versions and either D has several versions too or P is not the
/// majority version of its name. Taint only ever goes from false to true,
/// so repeating full passes over the edge set until nothing changes
/// terminates, cycles included, after at most one pass per package.
pub struct ConflictPropagator;

impl ConflictPropagator {
    /// Runs passes until a fixed point. Returns the number of passes,
    /// counting the final one that made no change.
    pub fn propagate(graph: &mut DependencyGraph) -> usize {
        let indices = graph.indices();
        let mut passes = 0;
        loop {
            passes += 1;
            let mut changed = false;
            for &source in &indices {
                for position in 0..graph.package(source).dependencies().len() {
                    let source_pkg = graph.package(source);
                    let target = source_pkg.dependencies()[position].target();
                    if graph.package(target).is_tainted() {
                        continue;
                    }
                    if Self::taints(source_pkg, graph.package(target)) {
                        changed |= graph.package_mut(target).taint();
                    }
                }
            }
            if !changed {
                return passes;
            }
        }
    }

    fn taints(source: &Package, target: &Package) -> bool {
        source.is_tainted()
            || (source.is_multi_version()
                && (target.is_multi_version() || !source.is_majority()))
    }
}
