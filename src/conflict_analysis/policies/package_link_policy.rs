use crate::conflict_analysis::domain::{Package, SourceLocator};

/// Forges whose web UI serves a commit at `<repo>/tree/<hash>`.
const TREE_URL_FORGES: &[&str] = &["github.com"];

const CRATES_IO_CRATE_URL: &str = "https://crates.io/crates/";
const CRATES_IO_SEARCH_URL: &str = "https://crates.io/search?q=";

/// PackageLinkPolicy picks the most useful hyperlink for a package.
///
/// `specific` selects a link to the locked version rather than to the
/// project as a whole. `base_url` is the prefix for workspace crates,
/// which link to `<base_url>/<name>/Cargo.toml`.
///
/// Rules, first match wins:
/// 1. git source on a known forge with a commit: repository URL without
///    query; when specific, without `.git` and followed by `/tree/<hash>`
/// 2. any other git source: the URL as locked
/// 3. workspace crate with a base URL: the crate's manifest
/// 4. registry source: the crates.io page, plus `/<version>` when specific
/// 5. anything else: a crates.io search for the name
pub struct PackageLinkPolicy;

impl PackageLinkPolicy {
    pub fn link(pkg: &Package, specific: bool, base_url: Option<&str>) -> String {
        match pkg.source() {
            SourceLocator::Git { url } => Self::git_link(pkg.source(), url, specific),
            SourceLocator::Workspace if base_url.is_some_and(|b| !b.is_empty()) => {
                let base = base_url.unwrap_or_default();
                let separator = if base.ends_with('/') { "" } else { "/" };
                format!("{}{}{}/Cargo.toml", base, separator, pkg.name())
            }
            SourceLocator::Registry { .. } => {
                if specific {
                    format!("{}{}/{}", CRATES_IO_CRATE_URL, pkg.name(), pkg.version())
                } else {
                    format!("{}{}", CRATES_IO_CRATE_URL, pkg.name())
                }
            }
            _ => format!(
                "{}{}",
                CRATES_IO_SEARCH_URL,
                urlencoding::encode(pkg.name())
            ),
        }
    }

    fn git_link(source: &SourceLocator, url: &url::Url, specific: bool) -> String {
        let on_forge = source
            .git_host()
            .is_some_and(|host| TREE_URL_FORGES.contains(&host));

        let (true, Some(commit)) = (on_forge, source.commit()) else {
            return url.as_str().to_string();
        };

        let mut repository = url.clone();
        repository.set_query(None);
        repository.set_fragment(None);
        if !specific {
            return repository.as_str().to_string();
        }

        if let Some(trimmed) = repository.path().strip_suffix(".git").map(str::to_string) {
            repository.set_path(&trimmed);
        }
        format!("{}/tree/{}", repository.as_str(), commit)
    }
}
