use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn daymark(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("daymark").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_set_then_get() {
    let dir = TempDir::new().unwrap();

    daymark(&dir)
        .args(["set", "2024-3-7", "Butter Pecan", "--note", "order early"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned 2024-3-7: Butter Pecan"));

    // Data lands beside the run directory
    assert!(dir.path().join("events.json").exists());

    daymark(&dir)
        .args(["get", "2024-3-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Butter Pecan").and(predicate::str::contains("order early")));
}

#[test]
fn test_show_renders_month_grid_and_listing() {
    let dir = TempDir::new().unwrap();

    daymark(&dir)
        .args(["set", "2024-3-7", "Mint Cookie"])
        .assert()
        .success();

    daymark(&dir)
        .args(["show", "march", "2024"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("March 2024")
                .and(predicate::str::contains("Mon"))
                .and(predicate::str::contains("Mint Cookie")),
        );
}

#[test]
fn test_clear_month_with_yes() {
    let dir = TempDir::new().unwrap();

    daymark(&dir)
        .args(["set", "2024-3-7", "A"])
        .assert()
        .success();
    daymark(&dir)
        .args(["set", "2024-4-1", "B"])
        .assert()
        .success();

    daymark(&dir)
        .args(["clear", "3", "2024", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 entries for March 2024"));

    daymark(&dir)
        .args(["get", "2024-3-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry"));

    daymark(&dir)
        .args(["get", "2024-4-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B"));
}

#[test]
fn test_unset_removes_the_day() {
    let dir = TempDir::new().unwrap();

    daymark(&dir)
        .args(["set", "2024-3-7", "Turtle"])
        .assert()
        .success();
    daymark(&dir)
        .args(["unset", "2024-3-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed entry for 2024-3-7"));
    daymark(&dir)
        .args(["get", "2024-3-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry"));
}

#[test]
fn test_choices_lists_defaults() {
    let dir = TempDir::new().unwrap();

    daymark(&dir)
        .arg("choices")
        .assert()
        .success()
        .stdout(predicate::str::contains("Butter Pecan"));
}

#[test]
fn test_choices_respects_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("daymark.json"),
        r#"{ "choices": ["Vanilla", "Pistachio"] }"#,
    )
    .unwrap();

    daymark(&dir)
        .arg("choices")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Vanilla")
                .and(predicate::str::contains("Butter Pecan").not()),
        );
}

#[test]
fn test_invalid_date_fails_with_error() {
    let dir = TempDir::new().unwrap();

    daymark(&dir)
        .args(["get", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_legacy_events_file_is_readable() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("events.json"), r#"{ "2023-12-1": "Turtle" }"#).unwrap();

    daymark(&dir)
        .args(["get", "2023-12-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Turtle"));
}

#[test]
fn test_corrupt_events_file_warns_but_runs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("events.json"), "{ definitely broken").unwrap();

    daymark(&dir)
        .args(["show", "3", "2024"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring unreadable events file"));

    // A mutation rewrites the file into the structured shape
    daymark(&dir)
        .args(["set", "2024-3-7", "Turtle"])
        .assert()
        .success();
    let on_disk = fs::read_to_string(dir.path().join("events.json")).unwrap();
    assert!(on_disk.contains("\"2024-3-7\""));
}
