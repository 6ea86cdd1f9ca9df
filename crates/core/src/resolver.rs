//! Name → descriptor resolution and descriptor → content reading.
//!
//! A [`SourceResolver`] owns one registry and one view of the embedded
//! table, so independent sessions never share search state.

use crate::archive;
use crate::config::ResolverConfig;
use crate::descriptor::{ManifestMatch, ResourceDescriptor, SourceContent};
use crate::embedded::{EmbeddedResources, EmbeddedTable};
use crate::error::Result;
use crate::manifest;
use crate::probe::Probe;
use crate::reader;
use crate::registry::{LocationKind, SourceLocation, SourceRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// `<location>/<name>`, treating `name` as relative even with a leading slash
pub(crate) fn join_name(location: &Path, name: &str) -> PathBuf {
    location.join(name.trim_start_matches('/'))
}

#[derive(Debug, Clone)]
pub struct SourceResolver {
    registry: SourceRegistry,
    embedded: EmbeddedResources,
}

impl SourceResolver {
    pub fn new(registry: SourceRegistry, embedded: EmbeddedResources) -> Self {
        Self { registry, embedded }
    }

    pub fn from_config(config: &ResolverConfig, table: Arc<EmbeddedTable>) -> Self {
        let mut registry = if config.seed_cwd {
            SourceRegistry::with_cwd(&config.archive_extension)
        } else {
            SourceRegistry::with_archive_extension(&config.archive_extension)
        };
        registry.add(&config.source_paths);

        let embedded = EmbeddedResources::new(config.mode, config.dev_root.clone(), table);
        Self::new(registry, embedded)
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SourceRegistry {
        &mut self.registry
    }

    pub fn embedded(&self) -> &EmbeddedResources {
        &self.embedded
    }

    pub fn add_source_paths<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.registry.add(paths);
    }

    pub fn remove_source_path(&mut self, path: &str) -> bool {
        self.registry.remove(path)
    }

    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.registry.list()
    }

    fn probe_location(location: SourceLocation<'_>, name: &str) -> Probe<ResourceDescriptor> {
        match location.kind {
            LocationKind::Archive => Probe::from_lookup(
                archive::find_entry(location.path, name).map(|stamp| {
                    stamp.map(|modified| ResourceDescriptor::Archive {
                        archive: location.path.to_path_buf(),
                        entry: name.to_string(),
                        modified,
                    })
                }),
            ),
            LocationKind::Directory => {
                // Existence only; readability is checked when the content is read
                let candidate = join_name(location.path, name);
                if candidate.exists() {
                    Probe::Found(ResourceDescriptor::File {
                        path: crate::path::normalize(&candidate),
                    })
                } else {
                    Probe::Missing
                }
            }
        }
    }

    /// Locate `name`. Embedded resources shadow every registered location;
    /// otherwise the first location (in registration order) that has it wins.
    pub fn resolve(&self, name: &str) -> Option<ResourceDescriptor> {
        if self.embedded.is_bundled(name) {
            trace!("{} is bundled", name);
            return Some(ResourceDescriptor::Bundled {
                name: name.to_string(),
            });
        }

        self.registry
            .iter()
            .find_map(|location| Self::probe_location(location, name).settle(location.path, name))
    }

    /// Search and read in one pass, without consulting the embedded table.
    ///
    /// Archive locations that lack the entry (or cannot be opened) are
    /// skipped. The first directory location ends the search whether or
    /// not it has the file, so archives registered after a directory are
    /// never reached.
    pub fn read_source(&self, name: &str) -> Option<SourceContent> {
        for location in self.registry.iter() {
            match location.kind {
                LocationKind::Archive => {
                    let probe = Probe::from_read(archive::read_entry(location.path, name));
                    if let Some(content) = probe.settle(location.path, name) {
                        return Some(content);
                    }
                }
                LocationKind::Directory => {
                    let path = join_name(location.path, name);
                    return Probe::from_read(reader::read_path(&path)).settle(location.path, name);
                }
            }
        }
        None
    }

    /// Read the content a descriptor points at.
    ///
    /// A bundled resource that cannot be loaded reads as `Ok(None)`. File and
    /// archive failures are errors: the descriptor claimed the resource was
    /// there.
    pub fn read(&self, descriptor: &ResourceDescriptor) -> Result<Option<SourceContent>> {
        match descriptor {
            ResourceDescriptor::Bundled { name } => Ok(self.embedded.load_content(name)),
            ResourceDescriptor::File { path } => reader::read_path(path).map(Some),
            ResourceDescriptor::Archive { archive, entry, .. } => {
                archive::read_entry(archive, entry).map(Some)
            }
        }
    }

    /// Resolve then read.
    pub fn load(&self, name: &str) -> Result<Option<SourceContent>> {
        match self.resolve(name) {
            Some(descriptor) => self.read(&descriptor),
            None => Ok(None),
        }
    }

    pub fn collect_manifest<S: AsRef<str>>(&self, filenames: &[S]) -> Vec<ManifestMatch> {
        manifest::collect_manifest(&self.registry, filenames)
    }

    pub fn load_upstream_js_libs(&self) -> Vec<String> {
        manifest::load_upstream_js_libs(&self.registry)
    }

    pub fn load_upstream_data_readers(&self) -> Vec<ManifestMatch> {
        manifest::load_upstream_data_readers(&self.registry)
    }

    pub fn list_archive_entries(&self, archive_path: &Path, prefix: &str) -> Result<Vec<String>> {
        archive::list_entries(archive_path, prefix)
    }
}
