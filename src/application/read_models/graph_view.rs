//! Node, edge and cluster views of the analysed graph

use crate::conflict_analysis::domain::{EdgeCategory, NodeCategory};
use serde::Serialize;

/// One surviving package
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    /// `<name>@<version>`, unique within the graph
    pub id: String,
    pub name: String,
    pub version: String,
    /// Source locator as written in the lockfile (empty for workspace crates)
    pub source: String,
    pub is_workspace: bool,
    pub category: NodeCategory,
    /// Link to this exact version
    pub link: String,
    /// Link to the project as a whole
    pub project_link: String,
    pub version_count: usize,
    pub is_majority: bool,
    pub is_tainted: bool,
    pub dep_versions: usize,
}

impl NodeView {
    pub fn is_multi_version(&self) -> bool {
        self.version_count > 1
    }
}

/// One dependency edge between two surviving packages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    /// Id of the depending package
    pub from: String,
    /// Id of the dependency
    pub to: String,
    pub category: EdgeCategory,
}

/// All versions of a name locked more than once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterView {
    pub name: String,
    pub project_link: String,
    /// Ids of the member nodes, in lockfile order
    pub node_ids: Vec<String>,
}
