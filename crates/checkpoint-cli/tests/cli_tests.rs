use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Test environment owning a temporary database file
struct TestEnv {
    _temp_dir: TempDir,
    db_arg: String,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let db_arg = temp_dir
            .path()
            .join("cli_test.db")
            .to_str()
            .expect("Temporary path is not UTF-8")
            .to_string();
        Self {
            _temp_dir: temp_dir,
            db_arg,
        }
    }

    /// Command with --no-color and the test database preset
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cp-plan").expect("Failed to find cp-plan binary");
        cmd.env_remove("CHECKPOINT_DATABASE_FILE")
            .args(["--no-color", "--database-file", &self.db_arg]);
        cmd
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).assert().success().get_output().clone();
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}

#[test]
fn test_cli_create_plan_with_cases() {
    let env = TestEnv::new();

    env.cmd()
        .args([
            "plan",
            "create",
            "Release 2.4",
            "--description",
            "Regression before release",
            "-c",
            "Login",
            "-c",
            "Checkout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("# 1. Release 2.4"))
        .stdout(predicate::str::contains("Regression before release"))
        .stdout(predicate::str::contains("### 1. Login (○ Pending)"))
        .stdout(predicate::str::contains("### 2. Checkout (○ Pending)"))
        .stdout(predicate::str::contains("- Status: ○ Pending"));
}

#[test]
fn test_cli_list_without_subcommand() {
    let env = TestEnv::new();
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));

    env.run(&["plan", "create", "Smoke"]);
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("## Smoke (ID: 1)"))
        .stdout(predicate::str::contains("0% (0/0 test cases)"));
}

#[test]
fn test_cli_status_changes_drive_plan_status() {
    let env = TestEnv::new();
    env.run(&[
        "plan", "create", "Walkthrough", "-c", "a", "-c", "b", "-c", "c", "-c", "d",
    ]);

    for id in ["1", "2", "3"] {
        env.run(&["case", "status", id, "PASSED"]);
    }
    env.cmd()
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Status: ➤ In Progress"))
        .stdout(predicate::str::contains("75% (3/4 test cases)"));

    env.cmd()
        .args(["case", "status", "4", "failed"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Changed status from PENDING to FAILED",
        ));
    env.cmd()
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Status: ✓ Completed"));

    env.run(&["case", "status", "2", "PENDING"]);
    env.cmd()
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("➤ In Progress"));
}

#[test]
fn test_cli_progress_json() {
    let env = TestEnv::new();
    env.run(&["plan", "create", "Json", "-c", "a", "-c", "b", "-c", "c"]);
    env.run(&["case", "status", "1", "NA"]);

    let stdout = env.run(&["plan", "progress", "1", "--json"]);
    let progress: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(progress["total"], 3);
    assert_eq!(progress["completed"], 1);
    assert_eq!(progress["progress_percent"], 33);

    env.cmd()
        .args(["plan", "progress", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan 1: 33% (1/3 test cases)"));
}

#[test]
fn test_cli_stats() {
    let env = TestEnv::new();
    env.run(&["plan", "create", "Stats", "-c", "a", "-c", "b"]);
    env.run(&["case", "status", "2", "FAILED"]);

    let stdout = env.run(&["plan", "stats", "1", "--json"]);
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["plan_id"], 1);
    assert_eq!(stats["FAILED"], 1);
    assert_eq!(stats["PENDING"], 1);
    assert_eq!(stats["progress_percent"], 50);

    env.cmd()
        .args(["plan", "stats", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| ✗ Failed | 1 |"));
}

#[test]
fn test_cli_case_lifecycle() {
    let env = TestEnv::new();
    env.run(&["plan", "create", "Cases"]);

    env.cmd()
        .args([
            "case", "add", "1", "Payment", "-d", "Card payment", "-v", "manual", "-p", "P1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created test case with ID: 1 in plan 1"))
        .stdout(predicate::str::contains("- Priority: P1 | Validation: manual"));

    env.cmd()
        .args(["case", "update", "1", "--name", "Card payment", "-p", "P2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed to 'Card payment'"))
        .stdout(predicate::str::contains("Changed priority from P1 to P2"));

    env.cmd()
        .args(["case", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Card payment"));

    env.cmd()
        .args(["case", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted test case 'Card payment'"));

    env.cmd()
        .args(["case", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Test case with ID 1 not found"));
}

#[test]
fn test_cli_rejects_invalid_values() {
    let env = TestEnv::new();
    env.run(&["plan", "create", "Strict", "-c", "a"]);

    env.cmd()
        .args(["case", "status", "1", "SKIPPED"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status: SKIPPED"));

    env.cmd()
        .args(["case", "add", "1", "b", "-p", "P9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("priority"));

    env.cmd()
        .args(["plan", "create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name must not be empty"));

    env.cmd()
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. a (○ Pending)"));
}

#[test]
fn test_cli_missing_plan() {
    let env = TestEnv::new();
    env.cmd()
        .args(["plan", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 42 not found"));

    env.cmd()
        .args(["case", "add", "42", "orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 42 not found"));
}

#[test]
fn test_cli_delete_plan_requires_confirmation() {
    let env = TestEnv::new();
    env.run(&["plan", "create", "Doomed", "-c", "a"]);

    env.cmd()
        .args(["plan", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    env.cmd()
        .args(["plan", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted plan 'Doomed' (ID: 1) and its 1 test cases",
        ));

    env.cmd()
        .args(["case", "show", "1"])
        .assert()
        .failure();
}

#[test]
fn test_cli_clear() {
    let env = TestEnv::new();
    env.run(&["plan", "create", "One", "-c", "a"]);
    env.run(&["plan", "create", "Two"]);

    env.cmd().args(["plan", "clear"]).assert().failure();

    env.cmd()
        .args(["plan", "clear", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Removed 2 plans and 1 test cases",
        ));
    env.cmd()
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_database_file_from_environment() {
    let env = TestEnv::new();
    env.run(&["plan", "create", "From flag"]);

    Command::cargo_bin("cp-plan")
        .unwrap()
        .env("CHECKPOINT_DATABASE_FILE", &env.db_arg)
        .args(["--no-color", "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From flag"));
}
