use crate::application::read_models::{ConflictReadModel, EdgeView, NodeView};
use crate::conflict_analysis::domain::{EdgeCategory, NodeCategory};
use crate::ports::outbound::ConflictFormatter;
use crate::shared::Result;
use std::collections::HashSet;
use std::fmt::Write;

/// DotFormatter adapter for Graphviz output
///
/// Every multi-version name becomes a `cluster<name>` subgraph holding its
/// versions as boxes. Nodes and edges are painted by category; the paint
/// table lives here, not in the analysis.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn node_paint(category: NodeCategory) -> &'static str {
        match category {
            NodeCategory::LeveragePoint => r#"; color="blue"; style="filled"; fillcolor="yellow""#,
            NodeCategory::ConflictRoot => r#"; color="red""#,
            NodeCategory::ConflictDescendant => r#"; color="orange""#,
            NodeCategory::MinorityAdjacent => r#"; color="yellow""#,
            NodeCategory::Unaffected => "",
        }
    }

    fn edge_paint(category: EdgeCategory) -> &'static str {
        match category {
            EdgeCategory::MinorityLink => r#"color="red"; penwidth=3"#,
            EdgeCategory::MajorityLink => r#"color="blue"; penwidth=2"#,
            EdgeCategory::TaintPropagation => r#"color="orange""#,
            EdgeCategory::SourceDiverges => r#"color="blue""#,
            EdgeCategory::Neutral => "penwidth=1.5",
        }
    }

    /// Escapes a value for use inside a double-quoted dot string.
    fn quote(value: &str) -> String {
        value.replace('\\', "\\\\").replace('"', "\\\"")
    }

    fn write_node(out: &mut String, indent: &str, node: &NodeView) -> std::fmt::Result {
        write!(out, "{}\"{}\" [id=\"", indent, Self::quote(&node.id))?;
        if node.is_multi_version() {
            write!(
                out,
                "{}\"; label=\"{}\"; shape=\"box",
                Self::quote(&node.id),
                Self::quote(&node.version)
            )?;
        } else if node.is_workspace {
            write!(
                out,
                "{}\"; label=\"{}",
                Self::quote(&node.name),
                Self::quote(&node.name)
            )?;
        } else {
            write!(out, "{}", Self::quote(&node.name))?;
        }
        writeln!(
            out,
            "\"; URL=\"{}\"{}];",
            Self::quote(&node.link),
            Self::node_paint(node.category)
        )
    }

    fn write_nodes(out: &mut String, model: &ConflictReadModel) -> std::fmt::Result {
        let mut written = HashSet::new();
        for node in &model.nodes {
            if !written.insert(node.name.as_str()) {
                continue;
            }
            let Some(cluster) = model.cluster(&node.name) else {
                Self::write_node(out, "  ", node)?;
                continue;
            };
            let name = Self::quote(&cluster.name);
            writeln!(out, "  subgraph \"cluster{}\" {{", name)?;
            writeln!(out, "    id = \"{}\";", name)?;
            writeln!(out, "    rank = \"max\";")?;
            writeln!(out, "    label = \"{}\";", name)?;
            writeln!(out, "    URL = \"{}\";", Self::quote(&cluster.project_link))?;
            for member in cluster.node_ids.iter().filter_map(|id| model.node(id)) {
                Self::write_node(out, "    ", member)?;
            }
            writeln!(out, "  }}")?;
        }
        Ok(())
    }

    fn write_edge(out: &mut String, edge: &EdgeView) -> std::fmt::Result {
        writeln!(
            out,
            "  \"{}\" -> \"{}\" [{}];",
            Self::quote(&edge.from),
            Self::quote(&edge.to),
            Self::edge_paint(edge.category)
        )
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConflictFormatter for DotFormatter {
    fn format(&self, model: &ConflictReadModel) -> Result<String> {
        let mut out = String::from("digraph crates {\n");
        Self::write_nodes(&mut out, model)?;
        for edge in &model.edges {
            Self::write_edge(&mut out, edge)?;
        }
        out.push_str("}\n");
        Ok(out)
    }
}
