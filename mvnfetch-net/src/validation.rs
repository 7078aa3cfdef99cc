// mvnfetch-net/src/validation.rs
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use md5::{Digest, Md5};
use mvnfetch_common::error::{MvnError, Result};
use mvnfetch_common::model::{Artifact, Repository, SnapshotBuild};
use reqwest::Client;
use tracing::debug;

use crate::http::{ensure_success, http_get};

/// Fetches the published `.md5` for the (resolved) artifact file.
///
/// The digest is kept as opaque text. Files in `md5sum` layout
/// (`<digest>  <file>`) are cut down to their first token.
pub async fn fetch_expected_checksum(
    client: &Client,
    repository: &Repository,
    artifact: &Artifact,
    build: Option<&SnapshotBuild>,
) -> Result<String> {
    let url = artifact.checksum_url(repository, build)?;
    let response = http_get(client, &url, repository.username(), repository.password()).await?;
    let response = ensure_success(response, &url)?;
    let body = response.text().await?;
    let checksum = body
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    debug!("Expected MD5 for {}: {}", url, checksum);
    Ok(checksum)
}

/// Hex-encoded MD5 of the whole file. Used for change detection only.
pub fn file_md5(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| {
        MvnError::IoError(format!(
            "Failed to open {} for checksum verification: {}",
            path.display(),
            e
        ))
    })?;
    let mut reader = BufReader::new(file);
    let mut hasher = Md5::new();
    let bytes_copied = io::copy(&mut reader, &mut hasher).map_err(|e| {
        MvnError::IoError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let actual = hex::encode(hasher.finalize());
    debug!(
        "Calculated MD5: {} ({} bytes read) for {}",
        actual,
        bytes_copied,
        path.display()
    );
    Ok(actual)
}

/// `Ok(false)` when `path` does not exist, otherwise whether its MD5 equals
/// `expected` (ASCII case-insensitive).
pub fn local_checksum_matches(path: &Path, expected: &str) -> Result<bool> {
    if !path.try_exists()? {
        debug!("No local file at {}", path.display());
        return Ok(false);
    }
    let actual = file_md5(path)?;
    debug!("Expected MD5:   {}", expected);
    Ok(actual.eq_ignore_ascii_case(expected.trim()))
}
