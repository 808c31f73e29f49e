mod package_link_policy;
mod presentation_policy;

pub use package_link_policy::PackageLinkPolicy;
pub use presentation_policy::PresentationPolicy;
