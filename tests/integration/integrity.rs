//! Verify and remove integration tests

use super::harness::{judgeseed, Fixture, SeedAssertions};

/// Look up a seeded executable's bundle digest via `show --json`
fn bundle_digest(fixture: &Fixture, execid: &str) -> String {
    let result = judgeseed(fixture, &["show", execid, "--json"]);
    result.assert_success();
    let record: serde_json::Value =
        serde_json::from_str(&result.stdout).expect("show --json should be valid JSON");
    record["immutable"]["digest"]
        .as_str()
        .expect("manifest should carry a digest")
        .to_string()
}

#[test]
fn verify_passes_after_seed() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    let result = judgeseed(&fixture, &["verify"]);

    result.assert_success();
    assert!(result.stdout_contains("boolfind_cmp verified"));
    assert!(result.stdout_contains("boolfind_run verified"));
}

#[test]
fn verify_detects_tampered_payload() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    let digest = bundle_digest(&fixture, "boolfind_run");
    fixture.tamper_bundle_file(&digest, "run");

    let result = judgeseed(&fixture, &["verify"]);

    result.assert_error_contains("digest mismatch");
    assert!(result.output_contains("boolfind_run"));

    // The untampered executable still verifies on its own
    judgeseed(&fixture, &["verify", "boolfind_cmp"]).assert_success();
}

#[test]
fn verify_on_empty_store_reports_nothing_to_do() {
    let fixture = Fixture::empty();

    let result = judgeseed(&fixture, &["verify"]);

    result.assert_success();
    assert!(result.stdout_contains("Nothing to verify"));
}

#[test]
fn remove_deletes_manifest_and_payload() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    judgeseed(&fixture, &["remove", "boolfind_cmp"]).assert_success();
    assert_eq!(fixture.manifest_count(), 1);
    assert_eq!(fixture.bundle_count(), 1);

    judgeseed(&fixture, &["remove", "boolfind_run"]).assert_success();
    assert_eq!(fixture.manifest_count(), 0);
    assert_eq!(fixture.bundle_count(), 0);
}

#[test]
fn remove_unknown_id_fails() {
    let fixture = Fixture::with_examples();
    judgeseed(&fixture, &["seed"]).assert_success();

    let result = judgeseed(&fixture, &["remove", "nonexistent"]);

    result.assert_error_contains("executable not found");
    assert_eq!(fixture.manifest_count(), 2);
}
