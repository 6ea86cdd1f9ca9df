//! Resources compiled into the host binary.
//!
//! In packaged mode names are looked up in a zlib-compressed table filled by
//! the host before the first resolution. In development mode the same names
//! are read from a local build-output directory instead, so resolution code
//! behaves identically before and after packaging.

use crate::config::Mode;
use crate::descriptor::SourceContent;
use crate::error::{Result, SourceError};
use flate2::read::ZlibDecoder;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::io::Read;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::warn;

static GLOBAL_TABLE: OnceCell<Arc<EmbeddedTable>> = OnceCell::new();

/// Install the process-wide table. Fails (returning the table) if one is
/// already installed.
pub fn install(table: EmbeddedTable) -> std::result::Result<(), Arc<EmbeddedTable>> {
    GLOBAL_TABLE.set(Arc::new(table))
}

/// The process-wide table, or an empty one when none was installed.
pub fn global() -> Arc<EmbeddedTable> {
    GLOBAL_TABLE.get().cloned().unwrap_or_default()
}

/// Convert `/`-separated resource names to the host separator used as table keys
pub fn native_key(name: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        name.to_string()
    } else {
        name.replace('/', &MAIN_SEPARATOR.to_string())
    }
}

/// Read-only map from resource name to zlib-compressed bytes
#[derive(Debug, Clone)]
pub struct EmbeddedTable {
    entries: HashMap<String, Vec<u8>>,
    built_at: SystemTime,
}

impl Default for EmbeddedTable {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            built_at: SystemTime::UNIX_EPOCH,
        }
    }
}

impl EmbeddedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-compressed payloads. Keys are taken as given.
    pub fn from_compressed<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<u8>)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            built_at: SystemTime::UNIX_EPOCH,
        }
    }

    /// Timestamp reported as the modification time of every entry
    pub fn with_build_time(mut self, built_at: SystemTime) -> Self {
        self.built_at = built_at;
        self
    }

    pub fn built_at(&self) -> SystemTime {
        self.built_at
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn inflate(name: &str, compressed: &[u8]) -> Result<String> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(|source| SourceError::Decompress {
            name: name.to_string(),
            source,
        })?;
    String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
        origin: format!("embedded:{name}"),
    })
}

/// Mode-aware access to embedded resources
#[derive(Debug, Clone)]
pub struct EmbeddedResources {
    mode: Mode,
    dev_root: PathBuf,
    table: Arc<EmbeddedTable>,
}

impl EmbeddedResources {
    pub fn new(mode: Mode, dev_root: impl Into<PathBuf>, table: Arc<EmbeddedTable>) -> Self {
        Self {
            mode,
            dev_root: dev_root.into(),
            table,
        }
    }

    pub fn packaged(table: Arc<EmbeddedTable>) -> Self {
        Self::new(Mode::Packaged, PathBuf::new(), table)
    }

    pub fn development(dev_root: impl Into<PathBuf>) -> Self {
        Self::new(Mode::Development, dev_root, Arc::default())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn dev_root(&self) -> &Path {
        &self.dev_root
    }

    pub fn table(&self) -> &EmbeddedTable {
        &self.table
    }

    pub fn is_bundled(&self, name: &str) -> bool {
        match self.mode {
            Mode::Development => self.dev_root.join(name).exists(),
            Mode::Packaged => self.table.contains(&native_key(name)),
        }
    }

    /// Text of an embedded resource; `None` when missing or unreadable.
    pub fn load(&self, name: &str) -> Option<String> {
        match self.mode {
            Mode::Development => std::fs::read_to_string(self.dev_root.join(name)).ok(),
            Mode::Packaged => {
                let compressed = self.table.get(&native_key(name))?;
                match inflate(name, compressed) {
                    Ok(text) => Some(text),
                    Err(e) => {
                        warn!("{}", e);
                        None
                    }
                }
            }
        }
    }

    /// Like [`load`](Self::load), paired with a modification time.
    pub fn load_content(&self, name: &str) -> Option<SourceContent> {
        let text = self.load(name)?;
        let modified = match self.mode {
            Mode::Development => std::fs::metadata(self.dev_root.join(name))
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH),
            Mode::Packaged => self.table.built_at(),
        };
        Some(SourceContent { text, modified })
    }
}
