use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
  "categories": [
    { "id": "11111111-1111-4111-8111-111111111111", "name": "Food", "emoji": "🍔", "defaultLimit": 400 },
    { "id": "22222222-2222-4222-8222-222222222222", "name": "Rent", "defaultLimit": 1000 }
  ],
  "transactions": [
    { "description": "Salary", "amount": 3000, "type": "INCOME", "date": "2025-03-01", "paymentMethod": "BANK_TRANSFER" },
    { "description": "March rent", "amount": 1000, "type": "EXPENSE", "date": "2025-03-02",
      "categoryId": "22222222-2222-4222-8222-222222222222", "paymentMethod": "BANK_TRANSFER" },
    { "description": "Groceries", "amount": "$45.50", "type": "EXPENSE", "transactionDate": "2025-03-10T09:30:00",
      "categoryId": "11111111-1111-4111-8111-111111111111", "paymentMethod": "CREDIT_CARD" },
    { "description": "Farmers market", "amount": 300, "type": "EXPENSE", "date": "2025-03-11",
      "categoryId": "11111111-1111-4111-8111-111111111111", "paymentMethod": "CASH" },
    { "description": "Mystery", "amount": 20, "type": "EXPENSE", "paymentMethod": "BITCOIN" }
  ],
  "goals": [
    { "name": "Vacation", "targetAmount": 2000, "currentAmount": 500 }
  ]
}"#;

struct Fixture {
    dir: TempDir,
    snapshot: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("snapshot.json");
        fs::write(&snapshot, SNAPSHOT).unwrap();
        Self { dir, snapshot }
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("budgetwise").unwrap();
        cmd.env("BUDGETWISE_CONFIG_DIR", self.config_dir())
            .env_remove("BUDGETWISE_LOG")
            .env_remove("BUDGETWISE_SNAPSHOT");
        cmd
    }

    fn report(&self, subcommand: &str, extra: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.arg(subcommand)
            .arg("--snapshot")
            .arg(&self.snapshot)
            .args(["--now", "2025-03-12"])
            .args(extra);
        cmd
    }
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn write_settings(dir: &Path, contents: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("config.json"), contents).unwrap();
}

#[test]
fn dashboard_table() {
    let fixture = Fixture::new();
    fixture
        .report("dashboard", &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budgetwise Dashboard (2025-03-12)"))
        .stdout(predicate::str::contains("Cash Flow (last 7 days)"))
        .stdout(predicate::str::contains("🍔 Food"))
        .stdout(predicate::str::contains("Vacation"));
}

#[test]
fn dashboard_json_view_model() {
    let fixture = Fixture::new();
    let report = json_output(&mut fixture.report("dashboard", &["--format", "json", "--window", "30"]));

    assert_eq!(report["now"], "2025-03-12");
    assert_eq!(report["window_days"], 30);
    assert_eq!(report["summary"]["transaction_count"], 5);
    assert_eq!(report["flow"].as_array().unwrap().len(), 30);
    assert_eq!(report["monthly"].as_array().unwrap().len(), 6);
    assert_eq!(report["monthly"][5]["label"], "Mar");

    let slices = report["category_breakdown"]["slices"].as_array().unwrap();
    let names: Vec<_> = slices.iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Rent", "Food", "Uncategorized"]);

    let budgets = report["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 2);
    assert!(budgets.iter().all(|b| b["status"] == "WARN"));

    assert_eq!(report["goals"][0]["progress"], 25.0);
    // the undated transaction is left out of recent activity
    assert_eq!(report["recent"].as_array().unwrap().len(), 4);
    assert_eq!(report["recent"][0]["description"], "Farmers market");
}

#[test]
fn dashboard_is_deterministic() {
    let fixture = Fixture::new();
    let first = json_output(&mut fixture.report("dashboard", &["--format", "json"]));
    let second = json_output(&mut fixture.report("dashboard", &["--format", "json"]));
    assert_eq!(first, second);
}

#[test]
fn flow_seven_days_ends_on_now() {
    let fixture = Fixture::new();
    let flow = json_output(&mut fixture.report("flow", &["--format", "json"]));
    let buckets = flow.as_array().unwrap();

    assert_eq!(buckets.len(), 7);
    // 2025-03-12 is a Wednesday
    assert_eq!(buckets[6]["label"], "Wed");
    assert_eq!(buckets[6]["key"], "2025-03-12");
    assert_eq!(buckets[5]["expense"], 300.0);
    assert_eq!(buckets[4]["expense"], 45.5);
}

#[test]
fn flow_monthly_granularity() {
    let fixture = Fixture::new();
    fixture
        .report("flow", &["--granularity", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oct"))
        .stdout(predicate::str::contains("Mar"));
}

#[test]
fn breakdown_by_payment_method() {
    let fixture = Fixture::new();
    let breakdown = json_output(&mut fixture.report(
        "breakdown",
        &["--by", "payment-method", "--format", "json"],
    ));

    let names: Vec<_> = breakdown["slices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Bank Transfer", "Cash", "Credit Card", "Other"]);
    assert_eq!(breakdown["total"], 1365.5);
}

#[test]
fn breakdown_top_reports_hidden_groups() {
    let fixture = Fixture::new();
    fixture
        .report("breakdown", &["--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("+ 2 more"));
}

#[test]
fn trends_compare_adjacent_windows() {
    let fixture = Fixture::new();
    let trends = json_output(&mut fixture.report("trends", &["--format", "json"]));

    assert_eq!(trends["current_window"]["start"], "2025-03-06");
    assert_eq!(trends["previous_window"]["end"], "2025-03-05");
    assert_eq!(trends["income"]["current"], 0.0);
    assert_eq!(trends["income"]["previous"], 3000.0);
    assert_eq!(trends["income"]["percent_change"], -100.0);
    assert_eq!(trends["expense"]["direction"], "down");
}

#[test]
fn budgets_yaml() {
    let fixture = Fixture::new();
    fixture
        .report("budgets", &["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category_label: Food"))
        .stdout(predicate::str::contains("status: WARN"));
}

#[test]
fn yaml_snapshot_is_accepted() {
    let fixture = Fixture::new();
    let path = fixture.dir.path().join("snapshot.yaml");
    fs::write(
        &path,
        "transactions:\n  - amount: 12.5\n    type: EXPENSE\n    date: 2025-03-12\n",
    )
    .unwrap();

    fixture
        .cmd()
        .args(["breakdown", "--format", "json", "--snapshot"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Uncategorized"));
}

#[test]
fn achievements_table() {
    let fixture = Fixture::new();
    fixture
        .report("achievements", &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Steps"))
        .stdout(predicate::str::contains("5/10"))
        .stdout(predicate::str::contains("1 / 4 unlocked"));
}

#[test]
fn backend_snapshot_with_numeric_ids_and_unknown_records() {
    let fixture = Fixture::new();
    let path = fixture.dir.path().join("backend.json");
    fs::write(
        &path,
        r#"{
          "categories": [ { "id": 1, "name": "Food" } ],
          "transactions": [
            { "id": 1, "amount": 25, "type": "EXPENSE", "date": "2025-03-10", "categoryId": 1 },
            { "id": 2, "amount": 99, "type": "TRANSFER", "date": "2025-03-10", "categoryId": 1 }
          ]
        }"#,
    )
    .unwrap();

    let breakdown = json_output(
        fixture
            .cmd()
            .args(["breakdown", "--format", "json", "--snapshot"])
            .arg(&path),
    );
    assert_eq!(breakdown["slices"][0]["name"], "Food");
    assert_eq!(breakdown["total"], 25.0);
}

#[test]
fn invalid_window_is_rejected() {
    let fixture = Fixture::new();
    fixture
        .report("trends", &["--window", "14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported window length"));
}

#[test]
fn invalid_now_is_rejected() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .arg("dashboard")
        .arg("--snapshot")
        .arg(&fixture.snapshot)
        .args(["--now", "March 12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn missing_snapshot_fails() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["dashboard", "--snapshot"])
        .arg(fixture.dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Snapshot not found"));
}

#[test]
fn settings_drive_defaults() {
    let fixture = Fixture::new();
    write_settings(
        &fixture.config_dir(),
        r#"{ "default_window_days": 30, "currency_symbol": "€", "default_format": "table" }"#,
    );

    fixture
        .report("dashboard", &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash Flow (last 30 days)"))
        .stdout(predicate::str::contains("€1000.00"));
}

#[test]
fn config_init_writes_settings() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"))
        .stdout(predicate::str::contains("Initialized:      true"));

    assert!(fixture.config_dir().join("config.json").exists());
}
