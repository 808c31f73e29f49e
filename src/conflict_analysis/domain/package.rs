use super::SourceLocator;
use crate::shared::Result;
use std::borrow::Borrow;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Crate names are ASCII identifiers; the names end up inside DOT
        // strings and URLs, so anything else is rejected up front.
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only ASCII alphanumerics, hyphens, underscores and dots are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a locked package version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        // Locked versions are exact semver strings: no ranges, no wildcards.
        if !version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '+')
        {
            anyhow::bail!(
                "Package version '{}' contains invalid characters. Only ASCII alphanumerics, dots, hyphens and plus signs are allowed.",
                version
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Version {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a package inside its [`DependencyGraph`](super::DependencyGraph).
///
/// Indices stay valid for the lifetime of the graph; trimming hides
/// packages but never shifts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageIndex(pub(crate) usize);

impl PackageIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

/// A resolved dependency edge.
///
/// The edge names its target by (name, version); `target` caches where
/// that key resolved when the graph was built. It is a lookup, not an
/// owning reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    name: PackageName,
    version: Version,
    target: PackageIndex,
}

impl Dependency {
    pub(crate) fn new(name: PackageName, version: Version, target: PackageIndex) -> Self {
        Self {
            name,
            version,
            target,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn target(&self) -> PackageIndex {
        self.target
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.name, self.version)
    }
}

/// Package entity: one locked (name, version) pair plus the attributes
/// derived by the analysis stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    name: PackageName,
    version: Version,
    source: SourceLocator,
    dependencies: Vec<Dependency>,
    incoming_count: usize,
    version_count: usize,
    is_majority: bool,
    is_tainted: bool,
    dep_versions: usize,
}

impl Package {
    pub fn new(name: PackageName, version: Version, source: SourceLocator) -> Self {
        Self {
            name,
            version,
            source,
            dependencies: Vec::new(),
            incoming_count: 0,
            version_count: 1,
            is_majority: false,
            is_tainted: false,
            dep_versions: 0,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    /// `name@version`, the key used for graph node ids.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    pub fn source(&self) -> &SourceLocator {
        &self.source
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Number of dependency edges pointing at this package.
    pub fn incoming_count(&self) -> usize {
        self.incoming_count
    }

    /// Number of locked versions sharing this package's name, itself included.
    pub fn version_count(&self) -> usize {
        self.version_count
    }

    pub fn is_multi_version(&self) -> bool {
        self.version_count > 1
    }

    /// Strictly more dependents than every sibling version.
    /// Always false for single-version packages.
    pub fn is_majority(&self) -> bool {
        self.is_majority
    }

    /// Reachable from a version conflict.
    pub fn is_tainted(&self) -> bool {
        self.is_tainted
    }

    /// Largest version count among the non-majority direct dependencies.
    pub fn dep_versions(&self) -> usize {
        self.dep_versions
    }

    /// An edge pointing at this package, which sits at `index`.
    pub(crate) fn as_dependency(&self, index: PackageIndex) -> Dependency {
        Dependency::new(self.name.clone(), self.version.clone(), index)
    }

    pub(crate) fn push_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    pub(crate) fn dependencies_mut(&mut self) -> &mut Vec<Dependency> {
        &mut self.dependencies
    }

    pub(crate) fn increment_incoming(&mut self) {
        self.incoming_count += 1;
    }

    pub(crate) fn set_version_count(&mut self, count: usize) {
        self.version_count = count;
    }

    pub(crate) fn set_majority(&mut self, is_majority: bool) {
        self.is_majority = is_majority;
    }

    /// Marks the package tainted. Returns true if it was not tainted before.
    pub(crate) fn taint(&mut self) -> bool {
        !std::mem::replace(&mut self.is_tainted, true)
    }

    pub(crate) fn set_dep_versions(&mut self, dep_versions: usize) {
        self.dep_versions = dep_versions;
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, version: &str) -> Package {
        Package::new(
            PackageName::new(name.to_string()).unwrap(),
            Version::new(version.to_string()).unwrap(),
            SourceLocator::Workspace,
        )
    }

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("serde_json".to_string()).unwrap();
        assert_eq!(name.as_str(), "serde_json");
    }

    #[test]
    fn test_package_name_new_empty() {
        assert!(PackageName::new("".to_string()).is_err());
    }

    #[test]
    fn test_package_name_rejects_quotes() {
        let result = PackageName::new("evil\"name".to_string());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid characters"));
    }

    #[test]
    fn test_package_name_too_long() {
        let result = PackageName::new("a".repeat(MAX_PACKAGE_NAME_LENGTH + 1));
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_version_accepts_prerelease_and_build_metadata() {
        let version = Version::new("1.0.0-alpha.1+build.5".to_string()).unwrap();
        assert_eq!(version.as_str(), "1.0.0-alpha.1+build.5");
    }

    #[test]
    fn test_version_rejects_ranges() {
        assert!(Version::new(">=1.0".to_string()).is_err());
        assert!(Version::new("1.*".to_string()).is_err());
    }

    #[test]
    fn test_version_new_empty() {
        assert!(Version::new("".to_string()).is_err());
    }

    #[test]
    fn test_new_package_defaults() {
        let pkg = package("libc", "0.2.150");
        assert_eq!(pkg.name(), "libc");
        assert_eq!(pkg.version(), "0.2.150");
        assert_eq!(pkg.id(), "libc@0.2.150");
        assert_eq!(pkg.incoming_count(), 0);
        assert_eq!(pkg.version_count(), 1);
        assert!(!pkg.is_multi_version());
        assert!(!pkg.is_majority());
        assert!(!pkg.is_tainted());
        assert_eq!(pkg.dep_versions(), 0);
        assert!(pkg.dependencies().is_empty());
    }

    #[test]
    fn test_taint_reports_first_transition_only() {
        let mut pkg = package("libc", "0.2.150");
        assert!(pkg.taint());
        assert!(!pkg.taint());
        assert!(pkg.is_tainted());
    }

    #[test]
    fn test_display_formats() {
        let pkg = package("rand", "0.8.5");
        assert_eq!(format!("{}", pkg), "rand @ 0.8.5");

        let dep = Dependency::new(
            PackageName::new("rand_core".to_string()).unwrap(),
            Version::new("0.6.4".to_string()).unwrap(),
            PackageIndex(3),
        );
        assert_eq!(format!("{}", dep), "rand_core @ 0.6.4");
        assert_eq!(dep.target().get(), 3);
    }
}
