//! Seeding integration tests
//!
//! Verifies the all-or-nothing behavior of `judgeseed seed`: two
//! executables on success, an untouched store on any failure.

use super::harness::{judgeseed, Fixture, SeedAssertions};

#[test]
fn seed_creates_both_executables() {
    let fixture = Fixture::with_examples();

    let result = judgeseed(&fixture, &["seed"]);

    result.assert_success();
    result.assert_seeded_references();
    assert_eq!(fixture.manifest_count(), 2);
    assert_eq!(fixture.bundle_count(), 2);
}

#[test]
fn second_seed_fails_on_duplicate_id() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    let result = judgeseed(&fixture, &["seed"]);

    result.assert_error_contains("duplicate executable id");
    // The first seed's records are untouched
    assert_eq!(fixture.manifest_count(), 2);
}

#[test]
fn missing_archive_commits_nothing() {
    let fixture = Fixture::with_examples();
    fixture.remove_example("boolfind_cmp.zip");

    let result = judgeseed(&fixture, &["seed"]);

    result.assert_error_contains("failed to open archive");
    assert_eq!(fixture.manifest_count(), 0);
    assert_eq!(fixture.bundle_count(), 0);
}

#[test]
fn missing_second_archive_also_commits_nothing() {
    let fixture = Fixture::with_examples();
    fixture.remove_example("boolfind_run.zip");

    let result = judgeseed(&fixture, &["seed"]);

    result.assert_failure();
    // The comparator archive ingested fine, but the batch never flushed
    assert_eq!(fixture.manifest_count(), 0);
}

#[test]
fn corrupt_archive_commits_nothing() {
    let fixture = Fixture::with_examples();
    fixture.corrupt_example("boolfind_run.zip");

    let result = judgeseed(&fixture, &["seed"]);

    result.assert_error_contains("corrupt archive");
    assert_eq!(fixture.manifest_count(), 0);
}

#[test]
fn archive_without_entrypoint_is_rejected() {
    let fixture = Fixture::with_examples();
    fixture.write_example_zip(
        "boolfind_cmp.zip",
        &[("README", b"no scripts here".as_slice(), false)],
    );

    let result = judgeseed(&fixture, &["seed"]);

    result.assert_error_contains("no entrypoint");
    assert_eq!(fixture.manifest_count(), 0);
}

#[test]
fn explicit_base_dir_flag_is_honored() {
    let examples = Fixture::with_examples();
    let elsewhere = Fixture::empty();

    let base_dir = examples.base_dir.to_string_lossy().to_string();
    let result = judgeseed(&elsewhere, &["seed", "--base-dir", &base_dir]);

    result.assert_success();
    assert_eq!(elsewhere.manifest_count(), 2);
    assert_eq!(examples.manifest_count(), 0);
}
