mod common;

use common::{
    compress, registry_of, resolver_of, write_file, write_jar, write_jar_with_forged_size,
};
use respath_core::archive;
use respath_core::embedded::native_key;
use respath_core::path::normalize;
use respath_core::{EmbeddedResources, EmbeddedTable, ResourceDescriptor, SourceResolver};
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_embedded_shadows_registered_locations() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "cljs/core.cljs", "(ns from-disk)");

    let table = EmbeddedTable::from_compressed([(
        native_key("cljs/core.cljs"),
        compress("(ns from-table)"),
    )]);
    let resolver = SourceResolver::new(
        registry_of(&[dir.path()]),
        EmbeddedResources::packaged(Arc::new(table)),
    );

    let descriptor = resolver.resolve("cljs/core.cljs").unwrap();
    assert_eq!(
        descriptor,
        ResourceDescriptor::Bundled {
            name: "cljs/core.cljs".to_string()
        }
    );
    let content = resolver.read(&descriptor).unwrap().unwrap();
    assert_eq!(content.text, "(ns from-table)");
}

#[test]
fn test_development_build_output_shadows_locations() {
    let dev = tempdir().unwrap();
    write_file(dev.path(), "cljs/core.js", "// compiled");
    let src = tempdir().unwrap();
    write_file(src.path(), "cljs/core.js", "// on path");

    let resolver = SourceResolver::new(
        registry_of(&[src.path()]),
        EmbeddedResources::development(dev.path()),
    );

    let content = resolver.load("cljs/core.js").unwrap().unwrap();
    assert_eq!(content.text, "// compiled");
}

#[test]
fn test_first_directory_wins() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    write_file(a.path(), "foo.txt", "from a");
    write_file(b.path(), "foo.txt", "from b");

    let resolver = resolver_of(&[a.path(), b.path()]);
    assert_eq!(
        resolver.resolve("foo.txt"),
        Some(ResourceDescriptor::File {
            path: normalize(&a.path().join("foo.txt"))
        })
    );
    assert_eq!(resolver.load("foo.txt").unwrap().unwrap().text, "from a");
}

#[test]
fn test_archive_before_directory_wins() {
    let dir = tempdir().unwrap();
    let jar = dir.path().join("lib.jar");
    write_jar(&jar, &[("foo.txt", "from jar")]);
    let src = dir.path().join("src");
    write_file(&src, "foo.txt", "from dir");

    let resolver = resolver_of(&[&jar, &src]);
    match resolver.resolve("foo.txt") {
        Some(ResourceDescriptor::Archive { archive, entry, .. }) => {
            assert_eq!(archive, normalize(&jar));
            assert_eq!(entry, "foo.txt");
        }
        other => panic!("expected archive descriptor, got {other:?}"),
    }
}

#[test]
fn test_archive_entry_names_match_exactly() {
    let dir = tempdir().unwrap();
    let jar = dir.path().join("lib.jar");
    write_jar(&jar, &[("foo/bar.cljs", "x")]);

    let resolver = resolver_of(&[&jar]);
    assert!(resolver.resolve("bar.cljs").is_none());
    assert!(resolver.resolve("foo/bar.cljs").is_some());
}

#[test]
fn test_not_found_is_none() {
    let dir = tempdir().unwrap();
    let resolver = resolver_of(&[dir.path()]);
    assert_eq!(resolver.resolve("nope.cljs"), None);
    assert_eq!(resolver.load("nope.cljs").unwrap(), None);
}

#[test]
fn test_read_source_directory_first_stops_search() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    let jar = dir.path().join("lib.jar");
    write_jar(&jar, &[("bar.txt", "from jar")]);

    // The directory consumes the single attempt; the archive is not reached
    let resolver = resolver_of(&[&src, &jar]);
    assert!(resolver.read_source("bar.txt").is_none());

    let resolver = resolver_of(&[&jar, &src]);
    assert_eq!(resolver.read_source("bar.txt").unwrap().text, "from jar");
}

#[test]
fn test_read_source_archives_fall_through() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("broken.jar");
    std::fs::write(&broken, "not a zip").unwrap();
    let other = dir.path().join("other.jar");
    write_jar(&other, &[("unrelated.txt", "")]);
    let jar = dir.path().join("lib.jar");
    write_jar(&jar, &[("bar.txt", "found")]);

    let resolver = resolver_of(&[&broken, &other, &jar]);
    assert_eq!(resolver.read_source("bar.txt").unwrap().text, "found");
}

#[test]
fn test_read_source_survives_forged_entry_size() {
    let dir = tempdir().unwrap();
    let forged = dir.path().join("forged.jar");
    write_jar_with_forged_size(&forged, "bar.txt", "bad");
    let jar = dir.path().join("good.jar");
    write_jar(&jar, &[("bar.txt", "good")]);

    let resolver = resolver_of(&[&forged, &jar]);
    let content = resolver.read_source("bar.txt").expect("bar.txt should be readable");

    // Whatever the forged jar yields, the search must not abort on it
    if archive::read_entry(&forged, "bar.txt").is_err() {
        assert_eq!(content.text, "good");
    }
}

#[test]
fn test_read_source_ignores_embedded_table() {
    let src = tempdir().unwrap();
    write_file(src.path(), "a.cljs", "disk");
    let table = EmbeddedTable::from_compressed([("a.cljs", compress("table"))]);
    let resolver = SourceResolver::new(
        registry_of(&[src.path()]),
        EmbeddedResources::packaged(Arc::new(table)),
    );

    let content = resolver.read_source("a.cljs").unwrap();
    assert_eq!(content.text, "disk");
    assert_eq!(
        content.modified,
        std::fs::metadata(src.path().join("a.cljs"))
            .unwrap()
            .modified()
            .unwrap()
    );
}

#[test]
fn test_registry_changes_apply_to_next_resolution() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    write_file(b.path(), "x.cljs", "b");

    let mut resolver = resolver_of(&[a.path()]);
    assert!(resolver.resolve("x.cljs").is_none());

    resolver.add_source_paths([b.path().to_string_lossy()]);
    assert!(resolver.resolve("x.cljs").is_some());

    assert!(resolver.remove_source_path(&b.path().to_string_lossy()));
    assert!(resolver.resolve("x.cljs").is_none());
    assert!(!resolver.remove_source_path(&b.path().to_string_lossy()));
    assert_eq!(resolver.source_paths(), vec![normalize(a.path())]);
}

#[test]
fn test_list_archive_entries() {
    let dir = tempdir().unwrap();
    let jar = dir.path().join("lib.jar");
    write_jar(
        &jar,
        &[
            ("cljs/core.cljs", ""),
            ("cljs/pprint.cljs", ""),
            ("clojure/string.cljs", ""),
        ],
    );

    let resolver = resolver_of(&[]);
    assert_eq!(
        resolver.list_archive_entries(&jar, "cljs/").unwrap(),
        vec!["cljs/core.cljs", "cljs/pprint.cljs"]
    );
    assert!(resolver.list_archive_entries(&dir.path().join("missing.jar"), "").is_err());
}
