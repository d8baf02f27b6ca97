//! Domain logic - pure release rules independent of git and file I/O

pub mod tag;
pub mod version;

pub use tag::Tag;
pub use version::{normalize, ReleaseVersion, VersionChange};
