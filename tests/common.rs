#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rdutyroster::store::layout;
use rdutyroster::store::workbook::{Cell, Sheet, Workbook};
use rdutyroster::store::{DocumentBackend, JsonBackend};
use std::env;
use std::path::{Path, PathBuf};

pub fn rdr() -> Command {
    cargo_bin_cmd!("rdutyroster")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdutyroster.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique roster document path inside the system temp dir
pub fn temp_doc(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdutyroster.json", name));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

pub fn write_doc(path: &str, wb: &Workbook) {
    JsonBackend.save(wb, Path::new(path)).expect("save document");
}

pub fn read_doc(path: &str) -> Workbook {
    JsonBackend.load(Path::new(path)).expect("load document")
}

/// Append one data row to a month sheet at the next free row.
pub fn push_duty_row(
    sheet: &mut Sheet,
    date: Cell,
    weekday: &str,
    morning: Option<&str>,
    afternoon: Option<&str>,
    leader: Option<&str>,
) {
    let row = sheet.row_count().max(layout::DATA_START_ROW);
    sheet.set_cell(row, layout::COL_DATE, date);
    sheet.set_cell(row, layout::COL_WEEKDAY, Cell::text(weekday));
    for (col, value) in [
        (layout::COL_MORNING, morning),
        (layout::COL_AFTERNOON, afternoon),
        (layout::COL_LEADER, leader),
    ] {
        match value {
            Some(v) => sheet.set_cell(row, col, Cell::text(v)),
            None => sheet.set_cell(row, col, Cell::Empty),
        }
    }
}

/// Month sheet skeleton: title + header, no data yet.
pub fn month_sheet<'a>(wb: &'a mut Workbook, name: &str) -> &'a mut Sheet {
    let sheet = wb.ensure_sheet(name);
    sheet.set_cell(layout::TITLE_ROW, 0, Cell::text("LỊCH TRỰC BAN"));
    for (col, header) in layout::MONTH_HEADERS.iter().enumerate() {
        sheet.set_cell(layout::HEADER_ROW, col, Cell::text(*header));
    }
    sheet
}

/// Personnel sheet with the given (name, exempt) pairs.
pub fn roster_sheet(wb: &mut Workbook, entries: &[(&str, bool)]) {
    let sheet = wb.ensure_sheet(layout::ROSTER_SHEET);
    sheet.set_cell(layout::ROSTER_HEADER_ROW, 0, Cell::text("STT"));
    sheet.set_cell(
        layout::ROSTER_HEADER_ROW,
        layout::ROSTER_COL_NAME,
        Cell::text("Họ tên"),
    );
    sheet.set_cell(
        layout::ROSTER_HEADER_ROW,
        layout::ROSTER_COL_EXEMPT,
        Cell::text("Miễn trực"),
    );

    for (i, (name, exempt)) in entries.iter().enumerate() {
        let row = layout::ROSTER_HEADER_ROW + 1 + i;
        sheet.set_cell(row, 0, Cell::text((i + 1).to_string()));
        sheet.set_cell(row, layout::ROSTER_COL_NAME, Cell::text(*name));
        if *exempt {
            sheet.set_cell(row, layout::ROSTER_COL_EXEMPT, Cell::text("x"));
        }
    }
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// A small August 2025 document used by many tests:
/// - 01/08 (Friday): An / Bich / Cuong
/// - 02/08 (Saturday): empty row (off day)
/// - 04/08 (Monday): Dung / An / Cuong, date stored as text dd/mm/yyyy
/// - 05/08 (Tuesday): Bich / Dung / Cuong
pub fn sample_workbook() -> Workbook {
    let mut wb = Workbook::new();

    let sheet = month_sheet(&mut wb, "8-2025");
    push_duty_row(
        sheet,
        Cell::Date(d(2025, 8, 1)),
        "Thứ Sáu",
        Some("Nguyen Van An"),
        Some("Tran Thi Bich"),
        Some("Le Van Cuong"),
    );
    push_duty_row(sheet, Cell::Date(d(2025, 8, 2)), "Thứ Bảy", None, None, None);
    push_duty_row(
        sheet,
        Cell::text("04/08/2025"),
        "Thứ Hai",
        Some("Pham Van Dung"),
        Some("Nguyen Van An"),
        Some("Le Van Cuong"),
    );
    push_duty_row(
        sheet,
        Cell::Date(d(2025, 8, 5)),
        "Thứ Ba",
        Some("Tran Thi Bich"),
        Some("Pham Van Dung"),
        Some("Le Van Cuong"),
    );

    roster_sheet(
        &mut wb,
        &[
            ("Nguyen Van An", false),
            ("Tran Thi Bich", false),
            ("Le Van Cuong", true),
            ("Pham Van Dung", false),
        ],
    );

    wb
}
