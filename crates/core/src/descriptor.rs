use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

/// Where a resource was found. Produced fresh by every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResourceDescriptor {
    /// Embedded in the host binary
    Bundled { name: String },
    /// Plain file under a directory location
    File { path: PathBuf },
    /// Entry inside an archive location
    Archive {
        archive: PathBuf,
        entry: String,
        modified: SystemTime,
    },
}

impl std::fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceDescriptor::Bundled { name } => write!(f, "bundled:{name}"),
            ResourceDescriptor::File { path } => write!(f, "file:{}", path.display()),
            ResourceDescriptor::Archive { archive, entry, .. } => {
                write!(f, "jar:{}!/{entry}", archive.display())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceContent {
    pub text: String,
    pub modified: SystemTime,
}

impl SourceContent {
    /// Modification time in milliseconds since the Unix epoch
    pub fn modified_millis(&self) -> u128 {
        self.modified
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }
}

/// One occurrence of a manifest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestMatch {
    /// The registered location that contributed the file
    pub origin: PathBuf,
    pub filename: String,
    pub text: String,
}

impl ManifestMatch {
    /// `<origin>/<filename>`, the url reported for data reader files
    pub fn url(&self) -> PathBuf {
        self.origin.join(&self.filename)
    }
}
