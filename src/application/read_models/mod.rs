//! Read models for CQRS-lite pattern
//!
//! View-optimized, serializable snapshots of an analysed graph. Renderers
//! only ever see these, never the domain aggregate.

mod conflict_read_model;
mod conflict_read_model_builder;
mod graph_view;

pub use conflict_read_model::{ConflictReadModel, FindingView, SummaryView};
pub use conflict_read_model_builder::ConflictReadModelBuilder;
pub use graph_view::{ClusterView, EdgeView, NodeView};
