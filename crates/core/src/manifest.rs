//! Manifest files collected from every source location.
//!
//! Unlike ordinary resources, which are shadowed by the first location that
//! has them, every library on the source path may contribute its own copy
//! of a manifest and all of them are returned.

use crate::archive;
use crate::descriptor::ManifestMatch;
use crate::error::Result;
use crate::probe::Probe;
use crate::registry::{LocationKind, SourceLocation, SourceRegistry};
use crate::resolver::join_name;

/// Foreign library declarations
pub const DEPS_MANIFEST: &str = "deps.cljs";

/// Tagged literal reader declarations, in lookup order
pub const DATA_READER_MANIFESTS: [&str; 2] = ["data_readers.cljs", "data_readers.cljc"];

fn read_manifest(location: SourceLocation<'_>, filename: &str) -> Result<String> {
    match location.kind {
        LocationKind::Archive => Ok(archive::read_entry(location.path, filename)?.text),
        LocationKind::Directory => Ok(std::fs::read_to_string(join_name(
            location.path,
            filename,
        ))?),
    }
}

/// Every readable occurrence of each filename, in registry order and then
/// in the order the filenames were given.
pub fn collect_manifest<S: AsRef<str>>(
    registry: &SourceRegistry,
    filenames: &[S],
) -> Vec<ManifestMatch> {
    let mut matches = Vec::new();
    for location in registry.iter() {
        for filename in filenames {
            let filename = filename.as_ref();
            let probe = Probe::from_read(read_manifest(location, filename));
            if let Some(text) = probe.settle(location.path, filename) {
                matches.push(ManifestMatch {
                    origin: location.path.to_path_buf(),
                    filename: filename.to_string(),
                    text,
                });
            }
        }
    }
    matches
}

/// Texts of every `deps.cljs` on the source path
pub fn load_upstream_js_libs(registry: &SourceRegistry) -> Vec<String> {
    collect_manifest(registry, &[DEPS_MANIFEST])
        .into_iter()
        .map(|m| m.text)
        .collect()
}

/// Every `data_readers.cljs` / `data_readers.cljc`; use [`ManifestMatch::url`]
/// for the reported location
pub fn load_upstream_data_readers(registry: &SourceRegistry) -> Vec<ManifestMatch> {
    collect_manifest(registry, &DATA_READER_MANIFESTS)
}
