// mvnfetch-common/src/config.rs
use std::env;

use tracing::debug;

use super::error::Result;
use crate::model::repository::{Repository, DEFAULT_REPOSITORY_URL};

pub const REPOSITORY_URL_ENV: &str = "MVNFETCH_REPOSITORY_URL";
pub const USERNAME_ENV: &str = "MVNFETCH_USERNAME";
pub const PASSWORD_ENV: &str = "MVNFETCH_PASSWORD";

/// Where to fetch from and with which credentials.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub repository_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        debug!("Loading mvnfetch configuration");
        let config = Self::from_lookup(|key| env::var(key).ok());
        debug!("Configuration loaded successfully.");
        config
    }

    /// Builds a config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let repository_url = get(REPOSITORY_URL_ENV);
        if repository_url.is_none() {
            debug!(
                "{} not set, falling back to default: {}",
                REPOSITORY_URL_ENV, DEFAULT_REPOSITORY_URL
            );
        }
        Self {
            repository_url,
            username: get(USERNAME_ENV),
            password: get(PASSWORD_ENV),
        }
    }

    /// Overlays explicitly provided values (e.g. command-line flags) on top.
    pub fn merge(
        mut self,
        repository_url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        if let Some(url) = repository_url.filter(|v| !v.is_empty()) {
            self.repository_url = Some(url);
        }
        if let Some(user) = username.filter(|v| !v.is_empty()) {
            self.username = Some(user);
        }
        if let Some(pass) = password.filter(|v| !v.is_empty()) {
            self.password = Some(pass);
        }
        self
    }

    pub fn repository(&self) -> Result<Repository> {
        Repository::parse(
            self.repository_url.as_deref().unwrap_or(DEFAULT_REPOSITORY_URL),
            self.username.as_deref(),
            self.password.as_deref(),
        )
    }
}
