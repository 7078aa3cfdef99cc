// mvnfetch-net/src/fetch.rs
use std::path::{Path, PathBuf};

use futures::StreamExt;
use mvnfetch_common::error::{MvnError, Result};
use mvnfetch_common::model::{Artifact, Repository, SnapshotBuild};
use reqwest::Client;
use tokio::fs::{self, File as TokioFile};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::http::{build_http_client, ensure_success, http_get};
use crate::metadata::resolve_snapshot;
use crate::validation::{fetch_expected_checksum, local_checksum_matches};

/// Downloads artifacts from one repository.
///
/// Each call runs its requests one after another. Concurrent downloads to the
/// same output path are not coordinated and may interleave writes.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    repository: Repository,
}

impl Fetcher {
    pub fn new(repository: Repository) -> Result<Self> {
        Ok(Self::with_client(build_http_client()?, repository))
    }

    pub fn with_client(client: Client, repository: Repository) -> Self {
        Self { client, repository }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Resolves the build a `-SNAPSHOT` coordinate points at, `None` for
    /// release versions.
    pub async fn resolve(&self, artifact: &Artifact) -> Result<Option<SnapshotBuild>> {
        if !artifact.is_snapshot() {
            return Ok(None);
        }
        resolve_snapshot(&self.client, &self.repository, artifact)
            .await
            .map(Some)
    }

    /// Makes sure `artifact` is present at `output_path` and returns that path.
    ///
    /// Without an output path the unresolved file name (e.g.
    /// `commons-text-1.10.1-SNAPSHOT.jar`) in the current directory is used.
    /// The remote `.md5` is always fetched; the artifact itself is only
    /// downloaded when the local file is missing or its digest differs.
    pub async fn download(&self, artifact: &Artifact, output_path: Option<&Path>) -> Result<PathBuf> {
        let output_path = match output_path.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(artifact.file_name(None)?),
        };
        debug!(
            "Preparing to fetch {} from {} into {}",
            artifact,
            self.repository.url(),
            output_path.display()
        );

        let build = self.resolve(artifact).await?;
        let expected = fetch_expected_checksum(
            &self.client,
            &self.repository,
            artifact,
            build.as_ref(),
        )
        .await?;

        match local_checksum_matches(&output_path, &expected) {
            Ok(true) => {
                debug!("Using existing file with matching checksum: {}", output_path.display());
                return Ok(output_path);
            }
            Ok(false) => debug!("Local copy missing or outdated: {}", output_path.display()),
            Err(e) => warn!(
                "Could not verify existing file {}: {}. Redownloading.",
                output_path.display(),
                e
            ),
        }

        let url = artifact.url(&self.repository, build.as_ref())?;
        let response = http_get(
            &self.client,
            &url,
            self.repository.username(),
            self.repository.password(),
        )
        .await?;
        let response = ensure_success(response, &url)?;

        ensure_parent_dir(&output_path).await?;
        let written = write_body(response, &output_path).await?;
        debug!(
            "Wrote {} bytes from {} to {}",
            written,
            url,
            output_path.display()
        );
        Ok(output_path)
    }
}

/// One-shot download with a freshly built client.
pub async fn download_artifact(
    repository: &Repository,
    artifact: &Artifact,
    output_path: Option<&Path>,
) -> Result<PathBuf> {
    Fetcher::new(repository.clone())?
        .download(artifact, output_path)
        .await
}

async fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if fs::metadata(parent).await.is_ok() {
        return Ok(());
    }
    debug!("Creating output directory {}", parent.display());
    fs::create_dir_all(parent).await.map_err(|e| {
        MvnError::IoError(format!(
            "Failed to create output directory {}: {}",
            parent.display(),
            e
        ))
    })
}

// Truncates and streams straight into the destination. An interrupted write
// leaves a partial file that the next checksum comparison will reject.
async fn write_body(response: reqwest::Response, path: &Path) -> Result<u64> {
    let mut file = TokioFile::create(path).await.map_err(|e| {
        MvnError::IoError(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await.map_err(|e| {
            MvnError::IoError(format!(
                "Failed to write download stream to {}: {}",
                path.display(),
                e
            ))
        })?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}
