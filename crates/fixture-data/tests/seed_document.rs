//! Integration tests for seed document serialization and file output.
//!
//! These tests validate the JSON layout of the written artifact and the
//! replace-on-rewrite behaviour of the atomic file write.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDateTime;
use fixture_data::{SeedDocument, generate_seed_document};

fn fixed_now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-11-25 12:00:00", "%Y-%m-%d %H:%M:%S")
        .expect("valid fixture timestamp")
}

#[test]
fn written_document_round_trips_through_json() {
    let document = generate_seed_document(42, fixed_now()).expect("generation should succeed");
    let path = unique_temp_path("populate_db.json");

    document.write_to_file(&path).expect("write seed document");

    let contents = fs::read_to_string(&path).expect("read written document");
    let round_trip: SeedDocument = serde_json::from_str(&contents).expect("parse document");
    assert_eq!(document, round_trip);

    cleanup(&path);
}

#[test]
fn written_document_keeps_collection_order() {
    let document = generate_seed_document(42, fixed_now()).expect("generation should succeed");
    let path = unique_temp_path("populate_db.json");

    document.write_to_file(&path).expect("write seed document");

    let contents = fs::read_to_string(&path).expect("read written document");
    let positions: Vec<usize> = [
        "\"master_perusahaan\"",
        "\"master_site\"",
        "\"master_device\"",
        "\"data_realtime\"",
        "\"api_keys\"",
        "\"users\"",
        "\"users_groups\"",
    ]
    .iter()
    .map(|name| contents.find(name).expect("collection name present"))
    .collect();
    assert!(
        positions.iter().zip(positions.iter().skip(1)).all(|(a, b)| a < b),
        "collections are out of order"
    );

    cleanup(&path);
}

#[test]
fn rewriting_replaces_the_previous_document() {
    let first = generate_seed_document(1, fixed_now()).expect("generation should succeed");
    let second = generate_seed_document(2, fixed_now()).expect("generation should succeed");
    let path = unique_temp_path("populate_db.json");

    first.write_to_file(&path).expect("write first document");
    second.write_to_file(&path).expect("write second document");

    let contents = fs::read_to_string(&path).expect("read written document");
    let loaded: SeedDocument = serde_json::from_str(&contents).expect("parse document");
    assert_eq!(loaded, second);
    assert_ne!(loaded, first);

    cleanup(&path);
}

#[test]
fn rewriting_leaves_no_temporary_files_behind() {
    let document = generate_seed_document(42, fixed_now()).expect("generation should succeed");
    let path = unique_temp_path("populate_db.json");

    document.write_to_file(&path).expect("write seed document");
    document.write_to_file(&path).expect("rewrite seed document");

    let parent = path.parent().expect("temp path has a parent");
    let entries: Vec<String> = fs::read_dir(parent)
        .expect("list temp dir")
        .map(|entry| {
            entry
                .expect("read dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(entries, vec!["populate_db.json".to_owned()]);

    cleanup(&path);
}

fn unique_temp_path(file_name: &str) -> Utf8PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let dir = std::env::temp_dir()
        .join("fixture-data-tests")
        .join(format!("seed-document-{suffix}-{counter}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    Utf8PathBuf::from_path_buf(dir.join(file_name)).expect("utf-8 temp path")
}

fn cleanup(path: &Utf8Path) {
    if let Some(parent) = path.parent() {
        drop(fs::remove_dir_all(parent));
    }
}
