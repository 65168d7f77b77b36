mod common;

use common::{d, month_sheet, push_duty_row, temp_doc, write_doc};
use rdutyroster::core::report::{self, ReportLogic};
use rdutyroster::store::Document;
use rdutyroster::store::layout;
use rdutyroster::store::workbook::{Cell, Workbook};
use std::path::PathBuf;

fn doc_with(name: &str, wb: &Workbook) -> Document {
    let path = temp_doc(name);
    write_doc(&path, wb);
    Document::new(PathBuf::from(path))
}

/// Two months of simple data:
/// August: An 2 shifts, Bich 2 shifts.
/// September: An 1 shift, Bich 1 shift.
fn two_month_workbook() -> Workbook {
    let mut wb = Workbook::new();

    let aug = month_sheet(&mut wb, "8-2025");
    push_duty_row(
        aug,
        Cell::Date(d(2025, 8, 1)),
        "Thứ Sáu",
        Some("An"),
        Some("Bich"),
        Some("Cuong"),
    );
    push_duty_row(
        aug,
        Cell::Date(d(2025, 8, 4)),
        "Thứ Hai",
        Some("Bich"),
        Some("An"),
        Some("Cuong"),
    );

    let sept = month_sheet(&mut wb, "9-2025");
    push_duty_row(
        sept,
        Cell::Date(d(2025, 9, 1)),
        "Thứ Hai",
        Some("An"),
        Some("Bich"),
        Some("Cuong"),
    );

    wb
}

fn summary_row<'a>(rows: &'a [Vec<String>], name: &str) -> Option<&'a Vec<String>> {
    rows.iter().find(|r| r[0] == name)
}

#[test]
fn test_aggregate_counts_per_person_per_month() {
    let doc = doc_with("agg_basic", &two_month_workbook());

    let outcome = ReportLogic::aggregate(&doc).expect("aggregate");
    assert!(outcome.is_applied(), "{}", outcome.message());

    let wb = doc.open().expect("open document");

    // Summary sheet sits first in the document.
    assert_eq!(wb.sheets[0].name, layout::SUMMARY_SHEET);

    let (headers, rows) = ReportLogic::summary_table(&wb).expect("summary table");
    assert_eq!(headers, vec!["Họ tên", "8-2025", "9-2025", "Tổng cộng"]);

    let an = summary_row(&rows, "An").expect("row for An");
    assert_eq!(an[1], "2");
    assert_eq!(an[2], "1");
    assert_eq!(an[3], "3");

    let bich = summary_row(&rows, "Bich").expect("row for Bich");
    assert_eq!(bich[3], "3");

    // Leaders are not counted by the aggregation.
    assert!(summary_row(&rows, "Cuong").is_none());
}

#[test]
fn test_aggregate_skips_merged_holiday_rows() {
    let mut wb = two_month_workbook();
    let aug = wb.sheet_mut("8-2025").unwrap();
    // Same non-empty value in both slots: a merged holiday cell, the whole
    // row contributes nothing, not even to 'An'.
    push_duty_row(
        aug,
        Cell::Date(d(2025, 8, 5)),
        "Thứ Ba",
        Some("An"),
        Some("An"),
        None,
    );

    let doc = doc_with("agg_holiday", &wb);
    ReportLogic::aggregate(&doc).expect("aggregate");

    let wb = doc.open().expect("open document");
    let (_, rows) = ReportLogic::summary_table(&wb).expect("summary table");
    let an = summary_row(&rows, "An").expect("row for An");
    assert_eq!(an[1], "2", "merged row must not count toward August");
}

#[test]
fn test_aggregate_blacklists_sentinel_tokens_per_slot() {
    let mut wb = two_month_workbook();
    let aug = wb.sheet_mut("8-2025").unwrap();
    // 'x' morning, real name afternoon: only the afternoon slot counts.
    push_duty_row(
        aug,
        Cell::Date(d(2025, 8, 6)),
        "Thứ Tư",
        Some("x"),
        Some("Bich"),
        None,
    );
    // Off-keyword rows never count.
    push_duty_row(
        aug,
        Cell::Date(d(2025, 8, 7)),
        "Thứ Năm",
        Some("Nghỉ lễ"),
        Some("Bich"),
        None,
    );

    let doc = doc_with("agg_blacklist", &wb);
    ReportLogic::aggregate(&doc).expect("aggregate");

    let wb = doc.open().expect("open document");
    let (_, rows) = ReportLogic::summary_table(&wb).expect("summary table");

    assert!(summary_row(&rows, "x").is_none());
    assert!(summary_row(&rows, "Nghỉ lễ").is_none());

    // Bich: 2 from the base fixture + 2 extra afternoons.
    let bich = summary_row(&rows, "Bich").expect("row for Bich");
    assert_eq!(bich[1], "4");
}

#[test]
fn test_aggregate_orders_months_chronologically() {
    let mut wb = Workbook::new();
    // Inserted out of order, including a year boundary.
    let jan = month_sheet(&mut wb, "1-2026");
    push_duty_row(
        jan,
        Cell::Date(d(2026, 1, 5)),
        "Thứ Hai",
        Some("An"),
        None,
        None,
    );
    let dec = month_sheet(&mut wb, "12-2025");
    push_duty_row(
        dec,
        Cell::Date(d(2025, 12, 1)),
        "Thứ Hai",
        Some("An"),
        None,
        None,
    );

    let doc = doc_with("agg_order", &wb);
    ReportLogic::aggregate(&doc).expect("aggregate");

    let wb = doc.open().expect("open document");
    let (headers, _) = ReportLogic::summary_table(&wb).expect("summary table");
    assert_eq!(headers, vec!["Họ tên", "12-2025", "1-2026", "Tổng cộng"]);
}

#[test]
fn test_aggregate_replaces_prior_summary() {
    let doc = doc_with("agg_replace", &two_month_workbook());

    ReportLogic::aggregate(&doc).expect("first aggregate");
    ReportLogic::aggregate(&doc).expect("second aggregate");

    let wb = doc.open().expect("open document");
    let summaries = wb
        .sheets
        .iter()
        .filter(|s| s.name == layout::SUMMARY_SHEET)
        .count();
    assert_eq!(summaries, 1);
    assert_eq!(wb.sheets[0].name, layout::SUMMARY_SHEET);
}

#[test]
fn test_aggregate_without_month_sheets_is_rejected() {
    let doc = doc_with("agg_empty", &Workbook::new());

    let outcome = ReportLogic::aggregate(&doc).expect("aggregate");
    assert!(!outcome.is_applied());
}

#[test]
fn test_statistics_respects_date_bounds() {
    let doc = doc_with("stats_bounds", &two_month_workbook());
    let wb = doc.open().expect("open document");

    // Only August 4th and beyond.
    let stats = report::statistics(&wb, d(2025, 8, 2), d(2025, 9, 30));
    assert_eq!(stats.get("Bich").copied(), Some(2));
    assert_eq!(stats.get("An").copied(), Some(2));

    let all = report::statistics(&wb, d(2025, 8, 1), d(2025, 9, 30));
    assert_eq!(all.get("An").copied(), Some(3));
}
