//! End-to-end prune workflows
//!
//! Each test builds a model folder, writes a usage report and runs
//! `deadwood prune` against it.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn deadwood() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("deadwood"))
}

const SALES: &str = "table Sales\n\
\tmeasure OldMeasure = SUM('Sales'[Amount])\n\
\t\tformatString: \"0\"\n\
\n\
\tcolumn DeadColumn = 'Sales'[Unused]\n\
\t\tdataType: string\n\
\n\
\tcolumn KeptColumn = 'Sales'[Kept]\n\
\t\tdataType: string\n";

const REPORT: &str = "Table,Name,Type,Status\n\
Sales,OldMeasure,Measure,Unused\n\
Sales,DeadColumn,Calculated Column,Unused\n\
d_calendario,Year,Calculated Column,Unused\n";

/// Create `tables/` with the given documents and a `usage.csv` report
fn setup(tables: &[(&str, &str)], report: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let tables_dir = temp.path().join("tables");
    fs::create_dir_all(&tables_dir).unwrap();
    for (name, content) in tables {
        fs::write(tables_dir.join(format!("{name}.tmdl")), content).unwrap();
    }
    let report_path = temp.path().join("usage.csv");
    fs::write(&report_path, report).unwrap();
    (temp, tables_dir, report_path)
}

fn read(dir: &Path, table: &str) -> String {
    fs::read_to_string(dir.join(format!("{table}.tmdl"))).unwrap()
}

// =============================================================================
// END-TO-END WORKFLOW TESTS
// =============================================================================

#[test]
fn test_prune_rewrites_documents_and_writes_log() {
    let calendar = "table d_calendario\n\tcolumn Year\n\t\tdataType: int64\n";
    let (temp, tables, report) = setup(&[("Sales", SALES), ("d_calendario", calendar)], REPORT);

    deadwood()
        .args(["prune", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(&tables)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Sales] (2 block(s))"))
        .stdout(predicate::str::contains("2 item(s) removed"));

    assert_eq!(
        read(&tables, "Sales"),
        "table Sales\n\tcolumn KeptColumn = 'Sales'[Kept]\n\t\tdataType: string\n"
    );
    assert_eq!(read(&tables, "d_calendario"), calendar);

    let log = fs::read_to_string(temp.path().join("removal_log.txt")).unwrap();
    assert_eq!(
        log,
        format!(
            "Total items removed: 2\n{}\nRemoved: [Sales] -> OldMeasure\nRemoved: [Sales] -> DeadColumn",
            "=".repeat(30)
        )
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let (temp, tables, report) = setup(&[("Sales", SALES)], REPORT);

    deadwood()
        .args(["prune", "--dry-run", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(&tables)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 item(s) would be removed. No files written."));

    assert_eq!(read(&tables, "Sales"), SALES);
    assert!(!temp.path().join("removal_log.txt").exists());
}

#[test]
fn test_protect_flag_extends_protection() {
    let (temp, tables, report) = setup(&[("Sales", SALES)], REPORT);

    deadwood()
        .args(["prune", "--protect", "Sales", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(&tables)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Sales]"))
        .stdout(predicate::str::contains("0 item(s) removed"));

    assert_eq!(read(&tables, "Sales"), SALES);
}

#[test]
fn test_json_output() {
    let (temp, tables, report) = setup(&[("Sales", SALES)], REPORT);
    let log = temp.path().join("out/log.txt");

    let output = deadwood()
        .args(["--json", "prune", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(&tables)
        .arg("--log")
        .arg(&log)
        .current_dir(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total_removed"], 2);
    assert_eq!(json["removed"][0]["name"], "OldMeasure");
    assert_eq!(json["tables"][0]["status"], "rewritten");
    assert!(log.exists());
}

#[test]
fn test_kind_aware_keeps_same_named_column() {
    let doc = "table Sales\n\tmeasure Amount = 1\n\tcolumn Amount\n\t\tdataType: double\n";
    let report = "Table,Name,Type,Status\nSales,Amount,Measure,Unused\n";
    let (temp, tables, report) = setup(&[("Sales", doc)], report);

    deadwood()
        .args(["prune", "--kind-aware", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(&tables)
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(read(&tables, "Sales"), "table Sales\n\tcolumn Amount\n\t\tdataType: double\n");
}

#[test]
fn test_config_file_sets_protection() {
    let (temp, tables, report) = setup(&[("Sales", SALES)], REPORT);
    fs::write(temp.path().join("deadwood.toml"), "[protection]\nprefixes = [\"Sal\"]\n").unwrap();

    deadwood()
        .args(["prune", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(&tables)
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(read(&tables, "Sales"), SALES);
}

// =============================================================================
// ERROR HANDLING TESTS
// =============================================================================

#[test]
fn test_missing_tables_directory_fails_before_writing() {
    let (temp, _tables, report) = setup(&[], REPORT);

    deadwood()
        .args(["prune", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(temp.path().join("missing"))
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("document directory not found"));

    assert!(!temp.path().join("removal_log.txt").exists());
}

#[test]
fn test_missing_report_fails() {
    let (temp, tables, _report) = setup(&[("Sales", SALES)], REPORT);

    deadwood()
        .args(["prune", "--report"])
        .arg(temp.path().join("nope.csv"))
        .arg("--tables")
        .arg(&tables)
        .current_dir(temp.path())
        .assert()
        .failure();

    assert_eq!(read(&tables, "Sales"), SALES);
}

#[test]
fn test_failed_run_still_records_removals_made_so_far() {
    let report = format!("{REPORT}Zeta,Thing,Measure,Unused\n");
    let (temp, tables, report) = setup(&[("Sales", SALES)], &report);
    fs::write(tables.join("Zeta.tmdl"), [0xff, 0xfe, 0x00]).unwrap();

    deadwood()
        .args(["prune", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(&tables)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 removal(s) are recorded in removal_log.txt"));

    assert_eq!(
        read(&tables, "Sales"),
        "table Sales\n\tcolumn KeptColumn = 'Sales'[Kept]\n\t\tdataType: string\n"
    );
    let log = fs::read_to_string(temp.path().join("removal_log.txt")).unwrap();
    assert!(log.starts_with("Total items removed: 2\n"));
    assert!(log.ends_with("Removed: [Sales] -> DeadColumn"));
}

#[test]
fn test_top_level_flagged_header_is_reported_as_left_in_place() {
    let doc = "measure Amount = 1\n\tformatString: \"0\"\n";
    let report = "Table,Name,Type,Status\nAmount,Amount,Measure,Unused\n";
    let (temp, tables, report) = setup(&[("Amount", doc)], report);

    deadwood()
        .args(["prune", "--report"])
        .arg(&report)
        .arg("--tables")
        .arg(&tables)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Amount] (1 flagged header(s) at top level left in place)"));

    assert_eq!(read(&tables, "Amount"), doc);
}
