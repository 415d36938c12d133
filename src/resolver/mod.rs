//! Resolution engine for turning a base version and build context into a release version

pub mod version_resolver;

pub use version_resolver::resolve;
