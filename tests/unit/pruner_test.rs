//! End-to-end library tests: report file, document directory, removal log

use std::fs;
use std::path::Path;

use deadwood::DeadwoodError;
use deadwood::adapters::{ReportFile, TmdlDirectory, write_removal_log};
use deadwood::config::Config;
use deadwood::core::models::RemovalLog;
use deadwood::core::ports::{DocumentStore, ReportSource};
use deadwood::core::services::{PruneOptions, Pruner, ReportPlan, TableStatus};

use crate::common::{SALES_PRUNED, SALES_REPORT, SALES_TMDL, TestModel};

fn run(model: &TestModel, report: &str, options: &PruneOptions) -> (RemovalLog, Vec<TableStatus>) {
    let raw = ReportFile::new(model.write_report(report)).load().unwrap();
    let plan = ReportPlan::from_report(&raw, &Config::default().columns).unwrap();
    let store = TmdlDirectory::open(model.tables_dir(), "tmdl").unwrap();

    let mut log = RemovalLog::new();
    let summary = Pruner::new(&store, &plan.index, options).run(&mut log).unwrap();
    (log, summary.tables.iter().map(|t| t.status).collect())
}

#[test]
fn prunes_sales_and_writes_log() {
    let model = TestModel::new();
    model.add_table("Sales", SALES_TMDL);

    let (log, statuses) = run(&model, SALES_REPORT, &PruneOptions::default());

    assert_eq!(model.read_table("Sales"), SALES_PRUNED);
    assert_eq!(statuses, vec![TableStatus::Rewritten]);

    let log_path = model.path().join("removal_log.txt");
    write_removal_log(&log_path, &log).unwrap();
    let content = fs::read_to_string(log_path).unwrap();
    assert!(content.starts_with("Total items removed: 2\n"));
    assert!(content.contains("Removed: [Sales] -> OldMeasure\nRemoved: [Sales] -> DeadColumn"));
}

#[test]
fn protected_tables_stay_byte_identical() {
    let model = TestModel::new();
    let calendar = SALES_TMDL.replace("Sales", "d_calendario");
    let local = SALES_TMDL.replace("Sales", "LocalDateTable_42");
    model.add_table("d_calendario", &calendar);
    model.add_table("LocalDateTable_42", &local);

    let report = "Table,Name,Type,Status\n\
d_calendario,OldMeasure,Measure,Unused\n\
LocalDateTable_42,DeadColumn,Column,Unused\n";
    let (log, statuses) = run(&model, report, &PruneOptions::default());

    assert_eq!(model.read_table("d_calendario"), calendar);
    assert_eq!(model.read_table("LocalDateTable_42"), local);
    assert_eq!(statuses, vec![TableStatus::Protected, TableStatus::Protected]);
    assert!(log.is_empty());
}

#[test]
fn second_run_changes_nothing() {
    let model = TestModel::new();
    model.add_table("Sales", SALES_TMDL);

    run(&model, SALES_REPORT, &PruneOptions::default());
    let (log, statuses) = run(&model, SALES_REPORT, &PruneOptions::default());

    assert_eq!(model.read_table("Sales"), SALES_PRUNED);
    assert_eq!(statuses, vec![TableStatus::Unchanged]);
    assert!(log.is_empty());
}

#[test]
fn untargeted_and_foreign_files_are_untouched() {
    let model = TestModel::new();
    model.add_table("Sales", SALES_TMDL);
    model.add_table("Geo", "table Geo\n\tcolumn OldMeasure\n");
    fs::write(model.tables_dir().join("README.md"), "measure OldMeasure\n").unwrap();

    let (_, statuses) = run(&model, SALES_REPORT, &PruneOptions::default());

    assert_eq!(statuses, vec![TableStatus::Untargeted, TableStatus::Rewritten]);
    assert_eq!(model.read_table("Geo"), "table Geo\n\tcolumn OldMeasure\n");
    assert_eq!(
        fs::read_to_string(model.tables_dir().join("README.md")).unwrap(),
        "measure OldMeasure\n"
    );
}

#[test]
fn missing_document_directory_is_input_fatal() {
    let model = TestModel::new();
    let err = TmdlDirectory::open(model.path().join("nope"), "tmdl").unwrap_err();
    assert!(matches!(err, DeadwoodError::DocumentDirMissing(_)));
    assert!(err.is_input_fatal());
}

#[test]
fn unreadable_document_aborts_run() {
    let model = TestModel::new();
    model.add_table("Sales", SALES_TMDL);
    fs::write(model.tables_dir().join("Zeta.tmdl"), [0xff, 0xfe, 0x00]).unwrap();

    let report = format!("{SALES_REPORT}Zeta,Thing,Measure,Unused\n");
    let raw = ReportFile::new(model.write_report(&report)).load().unwrap();
    let plan = ReportPlan::from_report(&raw, &Config::default().columns).unwrap();
    let store = TmdlDirectory::open(model.tables_dir(), "tmdl").unwrap();
    assert_eq!(store.list().unwrap().len(), 2);

    let mut log = RemovalLog::new();
    let err = Pruner::new(&store, &plan.index, &PruneOptions::default()).run(&mut log).unwrap_err();

    assert!(matches!(err, DeadwoodError::DocumentIo { .. }));
    assert!(!err.is_input_fatal());
    // documents before the failure were already processed
    assert_eq!(model.read_table("Sales"), SALES_PRUNED);
}

#[test]
fn xlsx_report_prunes_like_csv() {
    let model = TestModel::new();
    model.add_table("Sales", SALES_TMDL);

    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/usage_report.xlsx");
    let raw = ReportFile::new(fixture).load().unwrap();
    let plan = ReportPlan::from_report(&raw, &Config::default().columns).unwrap();
    assert_eq!(plan.mapping.table.header, "Table");
    assert_eq!(plan.rows_read, 3);

    let store = TmdlDirectory::open(model.tables_dir(), "tmdl").unwrap();
    let mut log = RemovalLog::new();
    let summary = Pruner::new(&store, &plan.index, &PruneOptions::default()).run(&mut log).unwrap();

    assert_eq!(model.read_table("Sales"), SALES_PRUNED);
    assert_eq!(summary.count(TableStatus::Rewritten), 1);
    assert_eq!(
        log.render(),
        format!(
            "Total items removed: 2\n{}\nRemoved: [Sales] -> OldMeasure\nRemoved: [Sales] -> DeadColumn",
            "=".repeat(30)
        )
    );
}
