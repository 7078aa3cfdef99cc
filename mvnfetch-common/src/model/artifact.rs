// mvnfetch-common/src/model/artifact.rs
use std::fmt;
use std::str::FromStr;

use crate::error::{MvnError, Result};
use crate::model::repository::Repository;

pub const SNAPSHOT_VERSION_SUFFIX: &str = "-SNAPSHOT";
pub const DEFAULT_EXTENSION: &str = "jar";
pub const METADATA_FILE_NAME: &str = "maven-metadata.xml";
pub const CHECKSUM_EXTENSION: &str = ".md5";

/// Coordinates of one artifact: `group:artifact:version[:classifier[:extension]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
    extension: String,
}

/// The concrete build a `-SNAPSHOT` version currently points at, as read from
/// the version directory's `maven-metadata.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotBuild {
    pub timestamp: String,
    pub build_number: String,
}

impl SnapshotBuild {
    pub fn new(timestamp: impl Into<String>, build_number: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            build_number: build_number.into(),
        }
    }

    /// `{timestamp}-{buildNumber}`, e.g. `20221006.131216-42`.
    pub fn snapshot_version(&self) -> String {
        format!("{}-{}", self.timestamp, self.build_number)
    }
}

impl Artifact {
    pub fn new(
        group_id: &str,
        artifact_id: &str,
        version: &str,
        classifier: Option<&str>,
        extension: Option<&str>,
    ) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            classifier: classifier.filter(|c| !c.is_empty()).map(str::to_string),
            extension: extension
                .filter(|e| !e.is_empty())
                .unwrap_or(DEFAULT_EXTENSION)
                .to_string(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn with_classifier(mut self, classifier: Option<&str>) -> Self {
        self.classifier = classifier.filter(|c| !c.is_empty()).map(str::to_string);
        self
    }

    pub fn with_extension(mut self, extension: Option<&str>) -> Self {
        if let Some(ext) = extension.filter(|e| !e.is_empty()) {
            self.extension = ext.to_string();
        }
        self
    }

    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT_VERSION_SUFFIX)
    }

    /// Repository-relative directory, always ending in `/`.
    pub fn path(&self) -> String {
        format!(
            "{}/{}/{}/",
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version
        )
    }

    /// `{artifactId}-{version}[-{classifier}].{extension}`. With a resolved
    /// snapshot build the trailing `-SNAPSHOT` is swapped for
    /// `-{timestamp}-{buildNumber}`.
    pub fn file_name(&self, build: Option<&SnapshotBuild>) -> Result<String> {
        let version = match build {
            None => self.version.clone(),
            Some(build) => {
                let base = self
                    .version
                    .strip_suffix(SNAPSHOT_VERSION_SUFFIX)
                    .ok_or_else(|| {
                        MvnError::InvalidCoordinate(format!(
                            "version '{}' of {} is not a {} version",
                            self.version, self, SNAPSHOT_VERSION_SUFFIX
                        ))
                    })?;
                format!("{base}-{}", build.snapshot_version())
            }
        };
        Ok(match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact_id, version, classifier, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact_id, version, self.extension),
        })
    }

    pub fn metadata_url(&self, repository: &Repository) -> String {
        format!("{}{}{}", repository.url(), self.path(), METADATA_FILE_NAME)
    }

    pub fn url(&self, repository: &Repository, build: Option<&SnapshotBuild>) -> Result<String> {
        Ok(format!(
            "{}{}{}",
            repository.url(),
            self.path(),
            self.file_name(build)?
        ))
    }

    pub fn checksum_url(
        &self,
        repository: &Repository,
        build: Option<&SnapshotBuild>,
    ) -> Result<String> {
        Ok(format!("{}{}", self.url(repository, build)?, CHECKSUM_EXTENSION))
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        let default_ext = self.extension == DEFAULT_EXTENSION;
        match (&self.classifier, default_ext) {
            (Some(classifier), true) => write!(f, ":{classifier}"),
            (Some(classifier), false) => write!(f, ":{classifier}:{}", self.extension),
            (None, false) => write!(f, "::{}", self.extension),
            (None, true) => Ok(()),
        }
    }
}

impl FromStr for Artifact {
    type Err = MvnError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(3..=5).contains(&parts.len()) {
            return Err(MvnError::InvalidCoordinate(format!(
                "'{s}': expected groupId:artifactId:version[:classifier[:extension]]"
            )));
        }
        if parts[..3].iter().any(|p| p.is_empty()) {
            return Err(MvnError::InvalidCoordinate(format!(
                "'{s}': groupId, artifactId and version must not be empty"
            )));
        }
        Ok(Self::new(
            parts[0],
            parts[1],
            parts[2],
            parts.get(3).copied(),
            parts.get(4).copied(),
        ))
    }
}
