use serde::Serialize;

/// Display category of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeCategory {
    /// Single-version, untainted, directly pulls in a minority version.
    LeveragePoint,
    /// Multi-version and not beneath another conflict.
    ConflictRoot,
    /// Multi-version and beneath another conflict.
    ConflictDescendant,
    /// Single-version but beneath a conflict.
    MinorityAdjacent,
    Unaffected,
}

impl NodeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeCategory::LeveragePoint => "leverage-point",
            NodeCategory::ConflictRoot => "conflict-root",
            NodeCategory::ConflictDescendant => "conflict-descendant",
            NodeCategory::MinorityAdjacent => "minority-adjacent",
            NodeCategory::Unaffected => "unaffected",
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display category of a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeCategory {
    /// Clean single-version source depending on a minority version.
    MinorityLink,
    /// Clean single-version source depending on the majority version.
    MajorityLink,
    /// Any other edge into a multi-version package.
    TaintPropagation,
    /// Edge out of a multi-version package into a single-version one.
    SourceDiverges,
    Neutral,
}

impl EdgeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeCategory::MinorityLink => "minority-link",
            EdgeCategory::MajorityLink => "majority-link",
            EdgeCategory::TaintPropagation => "taint-propagation",
            EdgeCategory::SourceDiverges => "source-diverges",
            EdgeCategory::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for EdgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
