// mvnfetch-net/src/metadata.rs
//! Resolves a `-SNAPSHOT` version to the timestamped build it currently
//! points at, using the version directory's `maven-metadata.xml`.
use mvnfetch_common::error::{MvnError, Result};
use mvnfetch_common::model::{Artifact, Repository, SnapshotBuild};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::http::{ensure_success, http_get};

// Only `versioning > snapshot > {timestamp, buildNumber}` is read; every other
// element of the document is ignored.
#[derive(Debug, Deserialize)]
struct MetadataDocument {
    versioning: Versioning,
}

#[derive(Debug, Deserialize)]
struct Versioning {
    snapshot: Snapshot,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    timestamp: String,
    build_number: String,
}

/// Parses a snapshot `maven-metadata.xml` body.
pub fn parse_metadata(body: &str) -> Result<SnapshotBuild> {
    let document: MetadataDocument = quick_xml::de::from_str(body)?;
    let snapshot = document.versioning.snapshot;
    let timestamp = snapshot.timestamp.trim();
    let build_number = snapshot.build_number.trim();
    if timestamp.is_empty() || build_number.is_empty() {
        return Err(MvnError::MalformedMetadata(
            "snapshot timestamp or buildNumber is empty".to_string(),
        ));
    }
    Ok(SnapshotBuild::new(timestamp, build_number))
}

/// Fetches and parses the snapshot metadata for `artifact`.
pub async fn resolve_snapshot(
    client: &Client,
    repository: &Repository,
    artifact: &Artifact,
) -> Result<SnapshotBuild> {
    let url = artifact.metadata_url(repository);
    let response = http_get(client, &url, repository.username(), repository.password()).await?;
    let response = ensure_success(response, &url)?;
    let body = response.text().await?;
    let build = parse_metadata(&body).map_err(|e| match e {
        MvnError::MalformedMetadata(msg) => MvnError::MalformedMetadata(format!("{url}: {msg}")),
        other => other,
    })?;
    debug!(
        "Resolved {} to snapshot build {}",
        artifact,
        build.snapshot_version()
    );
    Ok(build)
}
