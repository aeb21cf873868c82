use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn snowtooth_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("snowtooth"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    snowtooth_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API"));
}

#[test]
fn test_version() {
    snowtooth_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("snowtooth"));
}

// =============================================================================
// One-shot queries and mutations
// =============================================================================

#[test]
fn test_query_against_embedded_dataset() {
    snowtooth_cmd()
        .arg("query")
        .arg("liftCount")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"liftCount\": 10"));
}

#[test]
fn test_query_relationship_field() {
    snowtooth_cmd()
        .arg("query")
        .arg(r#"findTrailById(id: "grandma") { accessedByLifts { id } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("summit").and(predicate::str::contains("whirlybird")));
}

#[test]
fn test_mutate_unknown_id_prints_null() {
    snowtooth_cmd()
        .arg("mutate")
        .arg(r#"setTrailStatus(id: "bogus", status: CLOSED) { id }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"setTrailStatus\": null"));
}

#[test]
fn test_invalid_variables_error() {
    snowtooth_cmd()
        .arg("query")
        .arg("liftCount")
        .arg("--variables")
        .arg("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("variables"));
}

// =============================================================================
// Typed status shortcuts
// =============================================================================

#[test]
fn test_set_lift_status_shortcut() {
    snowtooth_cmd()
        .arg("set-lift")
        .arg("astra-express")
        .arg("hold")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"status\": \"HOLD\"")
                .and(predicate::str::contains("\"changed\"")),
        );
}

#[test]
fn test_set_trail_status_shortcut() {
    snowtooth_cmd()
        .arg("set-trail")
        .arg("grandma")
        .arg("closed")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"CLOSED\""));
}

#[test]
fn test_set_lift_rejects_invalid_status() {
    snowtooth_cmd()
        .arg("set-lift")
        .arg("astra-express")
        .arg("sideways")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid lift status"));
}

#[test]
fn test_trails_filtered_by_difficulty() {
    snowtooth_cmd()
        .arg("trails")
        .arg("--difficulty")
        .arg("expert")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("crass-to-canyon")
                .and(predicate::str::contains("grandma").not()),
        );
}

#[test]
fn test_trails_rejects_invalid_difficulty() {
    snowtooth_cmd()
        .arg("trails")
        .arg("--difficulty")
        .arg("impossible")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid trail difficulty"));
}

// =============================================================================
// Data directory loading
// =============================================================================

#[test]
fn test_query_with_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("lifts.json"),
        r#"[{"id": "solo", "name": "Solo", "status": "OPEN", "capacity": 2}]"#,
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("trails.json"), "[]").unwrap();

    snowtooth_cmd()
        .arg("query")
        .arg("liftCount trailCount")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"liftCount\": 1")
                .and(predicate::str::contains("\"trailCount\": 0")),
        );
}

#[test]
fn test_missing_snapshot_files_error() {
    let temp_dir = TempDir::new().unwrap();

    snowtooth_cmd()
        .arg("query")
        .arg("liftCount")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load snapshot"));
}
