use super::{Package, PackageIndex};
use std::collections::BTreeMap;

/// DependencyGraph aggregate owning every locked package of one analysis run.
///
/// Packages live in lockfile order in an arena; `groups` indexes the
/// surviving ones by name, then by version. Trimming removes entries from
/// `groups` only, so a [`PackageIndex`] never dangles, but a trimmed package
/// is no longer visible through the graph's lookups or iterators.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    packages: Vec<Package>,
    groups: BTreeMap<String, BTreeMap<String, PackageIndex>>,
}

impl DependencyGraph {
    pub(crate) fn new(packages: Vec<Package>) -> Self {
        let mut groups: BTreeMap<String, BTreeMap<String, PackageIndex>> = BTreeMap::new();
        for (i, pkg) in packages.iter().enumerate() {
            groups
                .entry(pkg.name().to_string())
                .or_default()
                .insert(pkg.version().to_string(), PackageIndex(i));
        }
        Self { packages, groups }
    }

    /// Surviving packages, in lockfile order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> + '_ {
        self.packages
            .iter()
            .filter(|pkg| self.find(pkg.name(), pkg.version()).is_some())
    }

    /// Indices of the surviving packages, in lockfile order.
    pub fn indices(&self) -> Vec<PackageIndex> {
        self.packages
            .iter()
            .enumerate()
            .filter(|(_, pkg)| self.find(pkg.name(), pkg.version()).is_some())
            .map(|(i, _)| PackageIndex(i))
            .collect()
    }

    pub fn package(&self, index: PackageIndex) -> &Package {
        &self.packages[index.0]
    }

    pub(crate) fn package_mut(&mut self, index: PackageIndex) -> &mut Package {
        &mut self.packages[index.0]
    }

    /// Looks up a surviving package by exact (name, version).
    pub fn find(&self, name: &str, version: &str) -> Option<&Package> {
        self.index_of(name, version).map(|i| &self.packages[i.0])
    }

    pub fn index_of(&self, name: &str, version: &str) -> Option<PackageIndex> {
        self.groups.get(name)?.get(version).copied()
    }

    /// Surviving versions of `name`, ordered by version string.
    pub fn versions_of(&self, name: &str) -> Vec<&Package> {
        self.groups
            .get(name)
            .map(|versions| versions.values().map(|i| &self.packages[i.0]).collect())
            .unwrap_or_default()
    }

    pub(crate) fn group_indices(&self, name: &str) -> Vec<PackageIndex> {
        self.groups
            .get(name)
            .map(|versions| versions.values().copied().collect())
            .unwrap_or_default()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Names with more than one locked version, alphabetically.
    pub fn multi_version_names(&self) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|(_, versions)| versions.len() > 1)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn package_count(&self) -> usize {
        self.groups.values().map(|versions| versions.len()).sum()
    }

    pub fn name_count(&self) -> usize {
        self.groups.len()
    }

    pub fn edge_count(&self) -> usize {
        self.packages().map(|pkg| pkg.dependencies().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drops the edges of `index` whose target name no longer survives.
    /// Returns the number of edges removed.
    pub(crate) fn drop_edges_to_missing_names(&mut self, index: PackageIndex) -> usize {
        let Self { packages, groups } = self;
        let dependencies = packages[index.0].dependencies_mut();
        let before = dependencies.len();
        dependencies.retain(|dep| groups.contains_key(dep.name()));
        before - dependencies.len()
    }

    /// Removes every version of `name` from the surviving set.
    pub(crate) fn remove_name(&mut self, name: &str) -> bool {
        self.groups.remove(name).is_some()
    }
}
