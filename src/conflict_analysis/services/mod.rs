mod conflict_propagator;
mod depth_annotator;
mod graph_builder;
mod graph_trimmer;
mod lockfile_parser;
mod popularity_classifier;

pub use conflict_propagator::ConflictPropagator;
pub use depth_annotator::DepthAnnotator;
pub use graph_builder::GraphBuilder;
pub use graph_trimmer::GraphTrimmer;
pub use lockfile_parser::{LockfileParser, ParsedLockfile};
pub use popularity_classifier::PopularityClassifier;
