pub mod category;
pub mod dependency_graph;
pub mod package;
pub mod package_record;
pub mod source_locator;

pub use category::{EdgeCategory, NodeCategory};
pub use dependency_graph::DependencyGraph;
pub use package::{Dependency, Package, PackageIndex, PackageName, Version};
pub use package_record::{DependencyDescriptor, PackageRecord};
pub use source_locator::SourceLocator;
