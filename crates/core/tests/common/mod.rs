#![allow(dead_code)]

use flate2::Compression;
use flate2::write::ZlibEncoder;
use respath_core::{EmbeddedResources, EmbeddedTable, SourceRegistry, SourceResolver};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub fn write_jar(path: &Path, files: &[(&str, &str)]) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, text) in files {
        zip.start_file(*name, options).unwrap();
        zip.write_all(text.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

pub fn write_file(root: &Path, name: &str, text: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, text).unwrap();
}

pub fn compress(text: &str) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

pub fn registry_of(paths: &[&Path]) -> SourceRegistry {
    let mut registry = SourceRegistry::new();
    registry.add(paths.iter().map(|p| p.to_string_lossy().into_owned()));
    registry
}

/// Resolver over `paths` with an empty packaged table
pub fn resolver_of(paths: &[&Path]) -> SourceResolver {
    SourceResolver::new(
        registry_of(paths),
        EmbeddedResources::packaged(Arc::new(EmbeddedTable::new())),
    )
}

/// Jar whose single entry claims an absurd uncompressed size in its
/// central-directory zip64 record.
pub fn write_jar_with_forged_size(path: &Path, name: &str, text: &str) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default().large_file(true);
    zip.start_file(name, options).unwrap();
    zip.write_all(text.as_bytes()).unwrap();
    zip.finish().unwrap();

    let mut bytes = std::fs::read(path).unwrap();
    let header = bytes
        .windows(4)
        .rposition(|w| w == b"PK\x01\x02")
        .expect("central directory header");
    let u16_at = |b: &[u8], at: usize| u16::from_le_bytes([b[at], b[at + 1]]) as usize;
    let name_len = u16_at(&bytes, header + 28);
    let extra_len = u16_at(&bytes, header + 30);

    let mut at = header + 46 + name_len;
    let end = at + extra_len;
    let mut patched = false;
    while at + 4 <= end {
        let id = u16_at(&bytes, at);
        let size = u16_at(&bytes, at + 2);
        if id == 0x0001 && size >= 8 {
            // 32-bit field defers to the zip64 record
            bytes[header + 24..header + 28].copy_from_slice(&u32::MAX.to_le_bytes());
            bytes[at + 4..at + 12].copy_from_slice(&(u64::MAX / 2).to_le_bytes());
            patched = true;
            break;
        }
        at += 4 + size;
    }
    assert!(patched, "jar has no zip64 extra field to patch");
    std::fs::write(path, bytes).unwrap();
}
