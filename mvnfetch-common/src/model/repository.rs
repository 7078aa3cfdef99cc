// mvnfetch-common/src/model/repository.rs
use std::fmt;

use url::Url;

use crate::error::{MvnError, Result};

pub const DEFAULT_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2/";

/// A remote repository laid out as `group/artifact/version/file`.
///
/// The base URL always ends with `/` so relative artifact paths can be appended
/// with plain string concatenation.
#[derive(Clone, PartialEq, Eq)]
pub struct Repository {
    url: String,
    username: Option<String>,
    password: Option<String>,
}

impl Repository {
    /// Builds a repository endpoint. An empty URL selects Maven Central, empty
    /// credentials count as absent.
    pub fn new(url: &str, username: Option<&str>, password: Option<&str>) -> Self {
        let mut url = if url.trim().is_empty() {
            DEFAULT_REPOSITORY_URL.to_string()
        } else {
            url.trim().to_string()
        };
        if !url.ends_with('/') {
            url.push('/');
        }
        Self {
            url,
            username: non_empty(username),
            password: non_empty(password),
        }
    }

    /// Like [`Repository::new`] but rejects anything that is not an absolute
    /// http(s) URL.
    pub fn parse(url: &str, username: Option<&str>, password: Option<&str>) -> Result<Self> {
        let repository = Self::new(url, username, password);
        let parsed = Url::parse(&repository.url).map_err(|e| {
            MvnError::Config(format!("Failed to parse repository URL '{url}': {e}"))
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(repository),
            other => Err(MvnError::Config(format!(
                "Invalid repository URL scheme for '{url}': must be http or https, got '{other}'"
            ))),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The username/password pair, only when both halves are set.
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (self.username(), self.password()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(DEFAULT_REPOSITORY_URL, None, None)
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
