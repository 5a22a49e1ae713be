//! Listing and show integration tests

use super::harness::{judgeseed, Fixture, SeedAssertions};

#[test]
fn list_shows_seeded_executables() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    let result = judgeseed(&fixture, &["list"]);

    result.assert_success();
    assert!(result.stdout_contains("boolfind_cmp (compare)"));
    assert!(result.stdout_contains("boolfind_run (run)"));
    assert!(result.stdout_contains("boolfind comparator"));
}

#[test]
fn empty_store_list_suggests_seeding() {
    let fixture = Fixture::empty();

    let result = judgeseed(&fixture, &["list"]);

    result.assert_success();
    assert!(result.stdout_contains("No executables stored"));
    assert!(result.stdout_contains("judgeseed seed"));
}

#[test]
fn list_json_has_both_records_without_payload_bytes() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    let result = judgeseed(&fixture, &["list", "--json"]);
    result.assert_success();

    let records: serde_json::Value =
        serde_json::from_str(&result.stdout).expect("list --json should be valid JSON");
    let records = records.as_array().expect("expected a JSON array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["execid"], "boolfind_cmp");
    assert_eq!(records[0]["type"], "compare");
    assert_eq!(records[1]["execid"], "boolfind_run");
    // File bytes stay in the bundle directory, never in manifests
    assert!(records[0]["immutable"]["files"][0].get("bytes").is_none());
}

#[test]
fn show_displays_manifest_details() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    let result = judgeseed(&fixture, &["show", "boolfind_run"]);

    result.assert_success();
    assert!(result.stdout_contains("boolfind run script"));
    assert!(result.stdout_contains("type:        run"));
    assert!(result.stdout_contains("run"));
}

#[test]
fn show_unknown_id_fails() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    let result = judgeseed(&fixture, &["show", "nonexistent"]);

    result.assert_error_contains("executable not found");
}
