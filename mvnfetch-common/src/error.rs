// mvnfetch-common/src/error.rs
use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MvnError {
    /// The repository answered one of the three fetches with a status >= 400.
    /// The rendered text is relied on by callers, keep it stable.
    #[error("status code {status} returned. URL: {url}")]
    RemoteNotFound { status: u16, url: String },

    #[error("Malformed snapshot metadata: {0}")]
    MalformedMetadata(String),

    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("IoError: {0}")]
    IoError(String),

    #[error("Transport Error: {0}")]
    Transport(#[from] Arc<reqwest::Error>),

    #[error("Invalid artifact coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for MvnError {
    fn from(err: std::io::Error) -> Self {
        MvnError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for MvnError {
    fn from(err: reqwest::Error) -> Self {
        MvnError::Transport(Arc::new(err))
    }
}

impl From<quick_xml::de::DeError> for MvnError {
    fn from(err: quick_xml::de::DeError) -> Self {
        MvnError::MalformedMetadata(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MvnError>;
