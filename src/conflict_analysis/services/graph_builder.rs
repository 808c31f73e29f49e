use crate::conflict_analysis::domain::{
    DependencyGraph, Package, PackageName, PackageRecord, SourceLocator, Version,
};
use crate::shared::error::CheckdepsError;
use crate::shared::Result;
use anyhow::Context;
use std::collections::HashSet;

/// GraphBuilder resolves raw package records into a [`DependencyGraph`].
///
/// Every dependency descriptor must match a locked (name, version) pair
/// exactly; the descriptor's source clause plays no part in resolution.
/// Self-dependencies and duplicate edges are kept and each one counts
/// towards the target's incoming count.
pub struct GraphBuilder;

impl GraphBuilder {
    /// # Errors
    /// - A record has an invalid name or version
    /// - The same (name, version) pair is locked twice
    /// - A dependency does not resolve (`CheckdepsError::UnresolvedDependency`)
    pub fn build(records: &[PackageRecord]) -> Result<DependencyGraph> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut packages = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert((record.name.as_str(), record.version.as_str())) {
                return Err(CheckdepsError::Validation {
                    message: format!(
                        "package {} @ {} is locked more than once",
                        record.name, record.version
                    ),
                }
                .into());
            }
            packages.push(Self::package_from_record(record)?);
        }

        let mut graph = DependencyGraph::new(packages);

        for index in graph.indices() {
            let record = &records[index.get()];
            for descriptor in &record.dependencies {
                let target = graph
                    .index_of(&descriptor.name, &descriptor.version)
                    .ok_or_else(|| CheckdepsError::UnresolvedDependency {
                        package: format!("{} @ {}", record.name, record.version),
                        dependency: format!("{} @ {}", descriptor.name, descriptor.version),
                    })?;
                let dependency = graph.package(target).as_dependency(target);
                graph.package_mut(index).push_dependency(dependency);
                graph.package_mut(target).increment_incoming();
            }
        }

        for index in graph.indices() {
            let count = graph.versions_of(graph.package(index).name()).len();
            graph.package_mut(index).set_version_count(count);
        }

        Ok(graph)
    }

    fn package_from_record(record: &PackageRecord) -> Result<Package> {
        let name = PackageName::new(record.name.clone())
            .with_context(|| format!("Invalid package record '{}'", record.name))?;
        let version = Version::new(record.version.clone()).with_context(|| {
            format!("Invalid version for package '{}'", record.name)
        })?;
        Ok(Package::new(
            name,
            version,
            SourceLocator::parse(&record.source),
        ))
    }
}
