//! Write every embedded resource out to a directory tree.

use crate::config::Mode;
use crate::embedded::{EmbeddedResources, inflate};
use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Dump the embedded table under `outdir`, one file per key. Does nothing in
/// development mode, where the resources already live on disk. Returns the
/// number of files written.
pub fn dump_embedded(resources: &EmbeddedResources, outdir: &Path) -> Result<usize> {
    if resources.mode() == Mode::Development {
        return Ok(0);
    }

    let table = resources.table();
    let mut written = 0;
    for key in table.keys() {
        let Some(compressed) = table.get(key) else {
            continue;
        };
        let target = outdir.join(key);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, inflate(key, compressed)?)?;
        written += 1;
    }

    info!("Exported {} embedded resources to {}", written, outdir.display());
    Ok(written)
}
