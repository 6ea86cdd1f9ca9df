//! Persistence of compiled artifacts, keyed by file name.
//!
//! The blobs are opaque text; reads never fail loudly and write failures are
//! handed back to the caller, since caching is best-effort.

use crate::descriptor::SourceContent;
use crate::reader;
use std::path::Path;
use tracing::debug;

pub fn read_cache(path: impl AsRef<Path>) -> Option<SourceContent> {
    reader::read_file(path)
}

pub fn write_cache(path: impl AsRef<Path>, text: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    std::fs::write(path, text).inspect_err(|e| {
        debug!("Cache write to {} failed: {}", path.display(), e);
    })
}
