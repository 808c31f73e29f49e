use regex::Regex;
use std::sync::LazyLock;

// `<name> <version> (<source>)`; the source clause is omitted for
// workspace members.
static DESCRIPTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+)\s+(\S+)(?:\s\(([^)]+)\))?").unwrap());

/// One dependency entry of a lockfile package, e.g.
/// `"vector_utils 0.1.0 (registry+https://github.com/rust-lang/crates.io-index)"`.
///
/// The source clause is kept for display only; resolution matches on
/// (name, version).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDescriptor {
    pub name: String,
    pub version: String,
    pub source: Option<String>,
}

impl DependencyDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            source: None,
        }
    }

    /// Parses the descriptor grammar. Returns `None` when the text does not
    /// contain a name and a version token.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = DESCRIPTOR_RE.captures(text)?;
        Some(Self {
            name: caps.get(1)?.as_str().to_string(),
            version: caps.get(2)?.as_str().to_string(),
            source: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }
}

/// Raw package record as handed over by the lockfile loader, before
/// any resolution or validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    /// Raw source string; empty for workspace crates.
    pub source: String,
    pub dependencies: Vec<DependencyDescriptor>,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            source: String::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_dependency(mut self, name: &str, version: &str) -> Self {
        self.dependencies
            .push(DependencyDescriptor::new(name, version));
        self
    }
}
