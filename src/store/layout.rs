//! Fixed physical layout of the roster document.
//!
//! Month sheets are addressed positionally (header text varies across legacy
//! tables): row 1 carries the merged title, row 4 the header, data starts at
//! row 5; columns A..E are date, weekday, morning, afternoon, leader. The
//! sheet names and labels below are part of the on-disk format shared with
//! legacy documents and must be written verbatim.

/// 0-based row of the sheet title.
pub const TITLE_ROW: usize = 0;
/// 0-based row of the column header.
pub const HEADER_ROW: usize = 3;
/// 0-based first data row.
pub const DATA_START_ROW: usize = 4;

/// 0-based column roles. Header text is never trusted.
pub const COL_DATE: usize = 0;
pub const COL_WEEKDAY: usize = 1;
pub const COL_MORNING: usize = 2;
pub const COL_AFTERNOON: usize = 3;
pub const COL_LEADER: usize = 4;

/// Number of columns a month sheet must provide.
pub const MONTH_SHEET_COLS: usize = 5;

/// Personnel roster sheet: column 2 holds names, column 3 the exemption
/// marker; header on row 1, data from row 2.
pub const ROSTER_SHEET: &str = "DS trực";
pub const ROSTER_HEADER_ROW: usize = 0;
pub const ROSTER_COL_NAME: usize = 1;
pub const ROSTER_COL_EXEMPT: usize = 2;
pub const EXEMPT_MARKER: &str = "x";

/// Summary sheet rebuilt by the aggregate report, always first in the
/// document.
pub const SUMMARY_SHEET: &str = "Thống kê Tổng hợp";
pub const SUMMARY_NAME_HEADER: &str = "Họ tên";
pub const SUMMARY_TOTAL_HEADER: &str = "Tổng cộng";

/// Column header written by the auto-scheduler.
pub const MONTH_HEADERS: [&str; MONTH_SHEET_COLS] =
    ["Ngày", "Thứ", "Trực ban 1", "Trực ban 2", "Lãnh đạo trực"];

/// Weekday labels written into the weekday column, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Thứ Hai",
    "Thứ Ba",
    "Thứ Tư",
    "Thứ Năm",
    "Thứ Sáu",
    "Thứ Bảy",
    "Chủ Nhật",
];

/// Title of a month sheet.
pub fn month_title(month: u32, year: i32) -> String {
    format!("LỊCH TRỰC BAN THÁNG {} NĂM {}", month, year)
}
