//! Month table reader: sheet resolution and row parsing.
//!
//! Columns are addressed by position, never by header text (labels vary
//! across legacy sheets). The date column may contain merged/blank cells
//! which are forward-filled top-to-bottom before any comparison.

use crate::models::duty::DutyRow;
use crate::models::month_key::MonthKey;
use crate::store::layout;
use crate::store::workbook::{Cell, Sheet, Workbook};
use crate::utils::date;
use chrono::NaiveDate;

/// Resolve the sheet for a month: canonical key first (`8-2025`), then the
/// zero-padded alternate (`08-2025`). `None` means "no schedule configured
/// for this month", a negative result, not an error.
pub fn resolve_sheet<'a>(wb: &'a Workbook, key: MonthKey) -> Option<&'a Sheet> {
    wb.sheet(&key.canonical()).or_else(|| wb.sheet(&key.padded()))
}

/// Same resolution, returning the sheet name so callers can reborrow
/// mutably.
pub fn resolve_sheet_name(wb: &Workbook, key: MonthKey) -> Option<String> {
    let canonical = key.canonical();
    if wb.sheet(&canonical).is_some() {
        return Some(canonical);
    }
    let padded = key.padded();
    if wb.sheet(&padded).is_some() {
        return Some(padded);
    }
    None
}

/// Date value of a cell: a native date, or text in one of the accepted
/// encodings. Text that parses to none of them is non-matching.
pub fn cell_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(d) => Some(*d),
        Cell::Text(s) => date::parse_flexible(s),
        Cell::Empty => None,
    }
}

/// Display string of a date cell, normalized to `dd/mm/yyyy`. Unparseable
/// text falls back to the trimmed raw value so display-string matching can
/// still compare it.
pub fn cell_display_date(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Date(d) => Some(date::display_date(*d)),
        Cell::Empty => None,
        Cell::Text(s) => {
            let t = s.trim();
            if t.is_empty() {
                return None;
            }
            Some(
                date::parse_flexible(t)
                    .map(date::display_date)
                    .unwrap_or_else(|| t.to_string()),
            )
        }
    }
}

/// Parse the data region of a month sheet into duty rows.
///
/// Forward-fill mirrors the merged-cell convention: a blank date cell
/// inherits the nearest prior non-blank raw value; a non-blank cell that
/// parses to no date yields `date = None`.
pub fn read_rows(sheet: &Sheet) -> Vec<DutyRow> {
    let mut out = Vec::new();
    let mut last_nonblank: Option<Cell> = None;

    for r in layout::DATA_START_ROW..sheet.row_count() {
        let raw = sheet.cell(r, layout::COL_DATE);
        let effective = if raw.is_empty() {
            last_nonblank.clone()
        } else {
            last_nonblank = Some(raw.clone());
            Some(raw.clone())
        };

        out.push(DutyRow {
            date: effective.as_ref().and_then(cell_date),
            weekday_label: sheet
                .cell(r, layout::COL_WEEKDAY)
                .as_text()
                .unwrap_or_default(),
            morning: sheet.cell(r, layout::COL_MORNING).as_text(),
            afternoon: sheet.cell(r, layout::COL_AFTERNOON).as_text(),
            leader: sheet.cell(r, layout::COL_LEADER).as_text(),
        });
    }

    out
}

/// Row index of the first data row whose date cell displays as `target`
/// (`dd/mm/yyyy`). Mutations match on the display string, not the date
/// value, for robustness against mixed encodings.
pub fn find_row_by_display_date(sheet: &Sheet, target: &str) -> Option<usize> {
    (layout::DATA_START_ROW..sheet.row_count())
        .find(|&r| cell_display_date(sheet.cell(r, layout::COL_DATE)).as_deref() == Some(target))
}
