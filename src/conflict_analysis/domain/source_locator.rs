use url::Url;

/// Where a locked package comes from, decided once when the lockfile is read.
///
/// Cargo writes the provenance as a prefixed string (`registry+<url>`,
/// `git+<url>#<commit>`, or nothing for workspace members and path
/// dependencies).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    /// No source: a crate inside the workspace (or a path dependency).
    Workspace,
    /// `registry+...`, published on a package registry.
    Registry { index: String },
    /// `git+http(s)://...`, fetched from a git repository.
    /// `url` still carries the query and the `#<commit>` fragment.
    Git { url: Url },
    /// Anything else, including git URLs that fail to parse.
    Unknown(String),
}

impl SourceLocator {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return SourceLocator::Workspace;
        }
        if let Some(stripped) = raw.strip_prefix("git+").filter(|s| s.starts_with("http")) {
            return match Url::parse(stripped) {
                Ok(url) => SourceLocator::Git { url },
                Err(_) => SourceLocator::Unknown(raw.to_string()),
            };
        }
        if raw.starts_with("registry") {
            return SourceLocator::Registry {
                index: raw.to_string(),
            };
        }
        SourceLocator::Unknown(raw.to_string())
    }

    pub fn is_workspace(&self) -> bool {
        matches!(self, SourceLocator::Workspace)
    }

    /// Host of a git source.
    pub fn git_host(&self) -> Option<&str> {
        match self {
            SourceLocator::Git { url } => url.host_str(),
            _ => None,
        }
    }

    /// Commit hash pinned in a git source's fragment, if any.
    pub fn commit(&self) -> Option<&str> {
        match self {
            SourceLocator::Git { url } => url.fragment().filter(|f| !f.is_empty()),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLocator::Workspace => Ok(()),
            SourceLocator::Registry { index } => write!(f, "{}", index),
            SourceLocator::Git { url } => write!(f, "git+{}", url),
            SourceLocator::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}
