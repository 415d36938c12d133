//! Domain logic - pure rules independent of files and process state

pub mod branch;
pub mod context;
pub mod resolution;
pub mod tag;
pub mod version;

pub use context::{snapshot_process_env, BuildKind, Context, Environment, SourceRef};
pub use resolution::Resolution;
pub use tag::Tag;
