// mvnfetch-net/src/lib.rs
pub mod fetch;
pub mod http;
pub mod metadata;
pub mod validation;

pub use fetch::{download_artifact, Fetcher};
pub use http::{build_http_client, ensure_success, http_get};
pub use metadata::{parse_metadata, resolve_snapshot};
pub use mvnfetch_common::{
    error::{MvnError, Result},
    model::{Artifact, Repository, SnapshotBuild},
    Config,
};
pub use validation::{fetch_expected_checksum, file_md5, local_checksum_matches};
