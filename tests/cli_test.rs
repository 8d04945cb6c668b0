mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_dry_run_prints_cards() {
    let csv = common::roster_csv(&[
        "Asha, 2105001, asha@kiit.ac.in, cse, female, ",
        "Ravi, 2105002, ravi@kiit.ac.in, it, male, true",
    ]);

    let mut cmd = Command::new(cargo_bin!("trapped"));
    cmd.arg(csv.path())
        .arg("--team-name")
        .arg("Escapees")
        .arg("--dry-run");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Registration successful!"))
        .stdout(predicate::str::contains("Your ID Cards"))
        .stdout(predicate::str::contains("Ravi  [Team Lead]"))
        .stdout(predicate::str::contains("Branch:  Information Technology"))
        .stdout(predicate::str::contains("Team:    Escapees").count(2));
}

#[test]
fn test_cli_lead_flag_overrides_csv() {
    let csv = common::roster_csv(&[
        "Asha, 2105001, asha@kiit.ac.in, cse, female, true",
        "Ravi, 2105002, ravi@kiit.ac.in, it, male, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("trapped"));
    cmd.arg(csv.path())
        .args(["--team-name", "Escapees", "--lead", "2", "--dry-run"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ravi  [Team Lead]"))
        .stdout(predicate::str::contains("Asha  [Team Lead]").not());
}

#[test]
fn test_cli_validation_failure_blocks_submission() {
    let csv = common::roster_csv(&["Asha, 2105001, not-an-email, cse, female, "]);

    let mut cmd = Command::new(cargo_bin!("trapped"));
    cmd.arg(csv.path())
        .args(["--team-name", "Escapees", "--dry-run"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Valid email required"))
        .stdout(predicate::str::contains("Your ID Cards").not());
}

#[test]
fn test_cli_skips_members_beyond_capacity() {
    let csv = common::roster_csv(&[
        "Asha, 2105001, asha@kiit.ac.in, cse, female, ",
        "Ravi, 2105002, ravi@kiit.ac.in, it, male, ",
        "Mei, 2105003, mei@kiit.ac.in, ee, female, ",
        "Omar, 2105004, omar@kiit.ac.in, civil, male, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("trapped"));
    cmd.arg(csv.path())
        .args(["--team-name", "Crowd", "--dry-run"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Skipping member Omar"))
        .stdout(predicate::str::contains("OFFICIAL PARTICIPANT").count(3))
        .stdout(predicate::str::contains("Omar").not());
}

#[test]
fn test_cli_reports_malformed_rows_and_bad_gender() {
    let csv = common::roster_csv(&[
        "Asha, 2105001, asha@kiit.ac.in, cse, female, ",
        "just-a-name",
        "Ravi, 2105002, ravi@kiit.ac.in, it, robot, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("trapped"));
    cmd.arg(csv.path())
        .args(["--team-name", "Solo", "--dry-run"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading member on row 2"))
        .stderr(predicate::str::contains("Skipping member Ravi"))
        .stdout(predicate::str::contains("OFFICIAL PARTICIPANT").count(1));
}

#[test]
fn test_cli_unreachable_webhook_still_proceeds() {
    let csv = common::roster_csv(&["Asha, 2105001, asha@kiit.ac.in, cse, female, "]);

    let mut cmd = Command::new(cargo_bin!("trapped"));
    cmd.arg(csv.path()).args([
        "--team-name",
        "Solo",
        "--strategy",
        "direct",
        "--webhook-url",
        "http://127.0.0.1:9/exec",
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Registration complete, unverified"))
        .stdout(predicate::str::contains("Asha  [Team Lead]"));
}
