//! Ordered set of source locations.
//!
//! Locations keep first-insertion order and are deduplicated by their
//! expanded, normalized path. Whether a location is an archive or a
//! directory is derived from its file-name suffix and never stored separately.

use crate::path;
use indexmap::IndexSet;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_ARCHIVE_EXTENSION: &str = "jar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Directory,
    Archive,
}

/// A registered location, borrowed from the registry during iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub path: &'a Path,
    pub kind: LocationKind,
}

#[derive(Debug, Clone)]
pub struct SourceRegistry {
    paths: IndexSet<PathBuf>,
    /// File-name suffix marking an archive, dot included (`.jar`)
    archive_suffix: String,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::with_archive_extension(DEFAULT_ARCHIVE_EXTENSION)
    }

    pub fn with_archive_extension(extension: &str) -> Self {
        Self {
            paths: IndexSet::new(),
            archive_suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }

    /// Registry seeded with the current working directory
    pub fn with_cwd(extension: &str) -> Self {
        let mut registry = Self::with_archive_extension(extension);
        registry.add(["."]);
        registry
    }

    /// Register locations. Already-present paths keep their position.
    pub fn add<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in paths {
            let expanded = path::expand(raw.as_ref());
            if self.paths.insert(expanded.clone()) {
                debug!("Registered source location {}", expanded.display());
            }
        }
    }

    /// Unregister a location; returns whether it was present.
    pub fn remove(&mut self, raw: &str) -> bool {
        let expanded = path::expand(raw);
        // shift_remove keeps the relative order of the remaining entries
        let removed = self.paths.shift_remove(&expanded);
        if removed {
            debug!("Removed source location {}", expanded.display());
        }
        removed
    }

    pub fn list(&self) -> Vec<PathBuf> {
        self.paths.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn kind_of(&self, path: &Path) -> LocationKind {
        let is_archive = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().ends_with(&self.archive_suffix));
        if is_archive {
            LocationKind::Archive
        } else {
            LocationKind::Directory
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = SourceLocation<'_>> + '_ {
        self.paths.iter().map(|p| SourceLocation {
            path: p.as_path(),
            kind: self.kind_of(p),
        })
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
