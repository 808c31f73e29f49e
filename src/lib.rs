//! checkdeps - explain duplicate dependency versions in a Cargo.lock
//!
//! Reads a Cargo.lock, finds every crate locked at more than one version,
//! works out which packages sit beneath those conflicts and which
//! single-version packages could remove them with an upgrade, and renders
//! the result as a text report, a Graphviz graph or JSON.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`conflict_analysis`): graph model, analysis stages and
//!   presentation policies
//! - **Application Layer** (`application`): use case, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use checkdeps::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = AnalyzeConflictsUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AnalysisRequest::new(PathBuf::from("Cargo.lock"), true);
//! let response = use_case.execute(request)?;
//!
//! let model = ConflictReadModelBuilder::build(&response, None);
//! let report = ReportFormatter::new().format(&model)?;
//! print!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod conflict_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, ReportFormatter};
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::read_models::{ConflictReadModel, ConflictReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeConflictsUseCase;
    pub use crate::conflict_analysis::domain::{
        DependencyGraph, EdgeCategory, NodeCategory, Package, PackageRecord, SourceLocator,
    };
    pub use crate::conflict_analysis::policies::{PackageLinkPolicy, PresentationPolicy};
    pub use crate::conflict_analysis::services::{
        ConflictPropagator, DepthAnnotator, GraphBuilder, GraphTrimmer, LockfileParser,
        PopularityClassifier,
    };
    pub use crate::ports::outbound::{
        ConflictFormatter, LockfileReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
