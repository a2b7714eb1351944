//! Domain logic - pure types independent of git operations

pub mod commit;
pub mod release;
pub mod version;

pub use commit::CommitRecord;
pub use release::{Changelog, Release};
pub use version::{Version, VersionBump};
