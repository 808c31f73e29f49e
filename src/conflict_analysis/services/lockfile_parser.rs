use crate::conflict_analysis::domain::{DependencyDescriptor, PackageRecord};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct CargoLock {
    #[serde(default)]
    package: Vec<CargoLockPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoLockPackage {
    name: String,
    version: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    dependencies: Vec<String>,
}

/// Output of [`LockfileParser::parse`].
#[derive(Debug, Clone, Default)]
pub struct ParsedLockfile {
    /// Package records in lockfile order.
    pub records: Vec<PackageRecord>,
    /// One message per dependency descriptor that was dropped.
    pub warnings: Vec<String>,
}

/// LockfileParser turns Cargo.lock text into raw package records.
///
/// Descriptors that do not name both a crate and a version are dropped
/// with a warning. Newer lockfiles leave out the version when only one
/// version of a crate is locked; such bare names are resolved against
/// the lockfile's own package list.
pub struct LockfileParser;

impl LockfileParser {
    pub fn parse(content: &str) -> Result<ParsedLockfile> {
        let lockfile: CargoLock =
            toml::from_str(content).context("Failed to parse Cargo.lock contents")?;

        let mut versions_by_name: HashMap<&str, Vec<&str>> = HashMap::new();
        for pkg in &lockfile.package {
            versions_by_name
                .entry(pkg.name.as_str())
                .or_default()
                .push(pkg.version.as_str());
        }

        let mut parsed = ParsedLockfile::default();
        for pkg in &lockfile.package {
            let mut dependencies = Vec::with_capacity(pkg.dependencies.len());
            for text in &pkg.dependencies {
                let descriptor = DependencyDescriptor::parse(text)
                    .or_else(|| Self::resolve_bare_name(text, &versions_by_name));
                match descriptor {
                    Some(descriptor) => dependencies.push(descriptor),
                    None => parsed.warnings.push(format!(
                        "failed to parse dependency '{}' of {} @ {}",
                        text, pkg.name, pkg.version
                    )),
                }
            }

            parsed.records.push(PackageRecord {
                name: pkg.name.clone(),
                version: pkg.version.clone(),
                source: pkg.source.clone().unwrap_or_default(),
                dependencies,
            });
        }

        Ok(parsed)
    }

    fn resolve_bare_name(
        text: &str,
        versions_by_name: &HashMap<&str, Vec<&str>>,
    ) -> Option<DependencyDescriptor> {
        let name = text.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return None;
        }
        match versions_by_name.get(name).map(Vec::as_slice) {
            Some([version]) => Some(DependencyDescriptor::new(name, *version)),
            _ => None,
        }
    }
}
