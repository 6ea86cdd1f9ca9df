//! Read-only access to jar (zip) archives.
//!
//! Archives are opened and parsed on every call; nothing is kept open
//! between lookups.

use crate::descriptor::SourceContent;
use crate::error::{Result, SourceError};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::SystemTime;
use zip::ZipArchive;
use zip::result::ZipError;

pub type Archive = ZipArchive<BufReader<File>>;

/// Upper bound on the preallocation hint taken from an entry's declared size
const MAX_SIZE_HINT: u64 = 1 << 20;

pub fn open(path: &Path) -> Result<Archive> {
    let file = File::open(path)?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

/// Convert a stored DOS timestamp (no zone, taken as UTC) to a `SystemTime`
pub fn to_system_time(stamp: Option<zip::DateTime>) -> SystemTime {
    stamp
        .and_then(|dt| {
            NaiveDate::from_ymd_opt(dt.year().into(), dt.month().into(), dt.day().into())?
                .and_hms_opt(dt.hour().into(), dt.minute().into(), dt.second().into())
        })
        .map(|naive| SystemTime::from(naive.and_utc()))
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn missing(archive: &Path, entry: &str) -> SourceError {
    SourceError::EntryNotFound {
        archive: archive.to_path_buf(),
        entry: entry.to_string(),
    }
}

/// Timestamp of `entry` if the archive contains a file with exactly that name.
pub fn find_entry(archive_path: &Path, entry: &str) -> Result<Option<SystemTime>> {
    let mut archive = open(archive_path)?;
    match archive.by_name(entry) {
        Ok(file) if file.is_file() => Ok(Some(to_system_time(file.last_modified()))),
        Ok(_) | Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Text of `entry` together with its stored timestamp.
pub fn read_entry(archive_path: &Path, entry: &str) -> Result<SourceContent> {
    let mut archive = open(archive_path)?;
    let mut file = match archive.by_name(entry) {
        Ok(file) if file.is_file() => file,
        Ok(_) | Err(ZipError::FileNotFound) => return Err(missing(archive_path, entry)),
        Err(e) => return Err(e.into()),
    };

    let modified = to_system_time(file.last_modified());
    // The declared size comes from the central directory and is untrusted
    let mut bytes = Vec::with_capacity(file.size().min(MAX_SIZE_HINT) as usize);
    file.read_to_end(&mut bytes)?;

    let text = String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
        origin: format!("{}!/{}", archive_path.display(), entry),
    })?;

    Ok(SourceContent { text, modified })
}

/// Names of all file entries starting with `prefix`, in archive order.
pub fn list_entries(archive_path: &Path, prefix: &str) -> Result<Vec<String>> {
    let archive = open(archive_path)?;
    Ok(archive
        .file_names()
        .filter(|name| name.starts_with(prefix) && !name.ends_with('/'))
        .map(str::to_string)
        .collect())
}
