use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Entry {entry} not found in {}", .archive.display())]
    EntryNotFound { archive: PathBuf, entry: String },
    #[error("Content of {origin} is not valid UTF-8")]
    InvalidUtf8 { origin: String },
    #[error("Failed to inflate embedded resource {name}: {source}")]
    Decompress {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SourceError {
    /// True for failures that only mean "not in this location".
    pub fn is_not_found(&self) -> bool {
        match self {
            SourceError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            SourceError::Archive(zip::result::ZipError::FileNotFound) => true,
            SourceError::EntryNotFound { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
