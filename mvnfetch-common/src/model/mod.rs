// mvnfetch-common/src/model/mod.rs
pub mod artifact;
pub mod repository;

pub use artifact::{Artifact, SnapshotBuild};
pub use repository::Repository;
