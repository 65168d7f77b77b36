//! Cross-month aggregation: per-person totals, month by month, written
//! back into the summary sheet at the front of the document.

use crate::core::month;
use crate::errors::AppResult;
use crate::models::month_key::MonthKey;
use crate::models::outcome::Outcome;
use crate::store::Document;
use crate::store::layout;
use crate::store::workbook::{Cell, Workbook};
use std::collections::{BTreeSet, HashMap};

/// Tokens that are not person names. Matching is by containment in the
/// lowercased cell value: legacy tables rely on it, so it stays that way.
const BLACKLIST: [&str; 7] = ["x", "-", "nghỉ", "nan", "thứ 7", "chủ nhật", "tết"];

pub struct ReportLogic;

impl ReportLogic {
    /// Rebuild the summary sheet from every month sheet in the document.
    pub fn aggregate(doc: &Document) -> AppResult<Outcome> {
        let mut wb = doc.open()?;

        // Month sheets, chronologically.
        let mut months: Vec<(MonthKey, String)> = wb
            .sheets
            .iter()
            .filter_map(|s| MonthKey::parse(&s.name).map(|k| (k, s.name.clone())))
            .collect();
        if months.is_empty() {
            return Ok(Outcome::rejected("No month sheets found in the document"));
        }
        months.sort_by_key(|(k, _)| k.sort_index());

        let mut officers: BTreeSet<String> = BTreeSet::new();
        let mut monthly: Vec<HashMap<String, u32>> = Vec::with_capacity(months.len());

        for (_, sheet_name) in &months {
            let sheet = wb.sheet(sheet_name).unwrap();
            let mut counts: HashMap<String, u32> = HashMap::new();

            for r in layout::DATA_START_ROW..sheet.row_count() {
                let morning = sheet
                    .cell(r, layout::COL_MORNING)
                    .as_text()
                    .unwrap_or_default();
                let afternoon = sheet
                    .cell(r, layout::COL_AFTERNOON)
                    .as_text()
                    .unwrap_or_default();

                // Identical non-empty morning/afternoon marks a merged
                // holiday cell in legacy tables: the whole row is excluded
                // from counting. (This also drops the rare day where one
                // person genuinely works both shifts; kept for
                // compatibility with existing documents.)
                if !morning.is_empty() && morning == afternoon {
                    continue;
                }

                for value in [morning, afternoon] {
                    if !value.is_empty() && !is_blacklisted(&value) {
                        *counts.entry(value.clone()).or_insert(0) += 1;
                        officers.insert(value);
                    }
                }
            }

            monthly.push(counts);
        }

        //
        // Summary sheet: recreated at position 0, one row per person,
        // one column per month plus a running total.
        //
        let officer_count = officers.len();
        let month_count = months.len();

        let summary = wb.insert_sheet_first(layout::SUMMARY_SHEET);
        summary.set_cell(0, 0, Cell::text(layout::SUMMARY_NAME_HEADER));
        for (i, (_, sheet_name)) in months.iter().enumerate() {
            summary.set_cell(0, i + 1, Cell::text(sheet_name.clone()));
        }
        summary.set_cell(0, month_count + 1, Cell::text(layout::SUMMARY_TOTAL_HEADER));

        for (row, officer) in officers.iter().enumerate() {
            let r = row + 1;
            summary.set_cell(r, 0, Cell::text(officer.clone()));

            let mut total = 0u32;
            for (i, counts) in monthly.iter().enumerate() {
                let count = counts.get(officer).copied().unwrap_or(0);
                summary.set_cell(r, i + 1, Cell::text(count.to_string()));
                total += count;
            }
            summary.set_cell(r, month_count + 1, Cell::text(total.to_string()));
        }

        doc.persist(&wb)?;

        Ok(Outcome::applied(format!(
            "Summary table updated: {} personnel across {} months",
            officer_count, month_count
        )))
    }

    /// Read the summary sheet back as printable headers + rows.
    pub fn summary_table(wb: &Workbook) -> Option<(Vec<String>, Vec<Vec<String>>)> {
        let sheet = wb.sheet(layout::SUMMARY_SHEET)?;
        if sheet.row_count() == 0 {
            return None;
        }

        let cols = sheet.rows[0].len();
        let headers: Vec<String> = (0..cols)
            .map(|c| sheet.cell(0, c).as_text().unwrap_or_default())
            .collect();

        let rows = (1..sheet.row_count())
            .map(|r| {
                (0..cols)
                    .map(|c| sheet.cell(r, c).as_text().unwrap_or_default())
                    .collect()
            })
            .collect();

        Some((headers, rows))
    }
}

fn is_blacklisted(value: &str) -> bool {
    let v = value.to_lowercase();
    BLACKLIST.iter().any(|w| v.contains(w))
}

/// Month-aware duty totals for a date range, one pass per month sheet.
pub fn statistics(
    wb: &Workbook,
    from: chrono::NaiveDate,
    to: chrono::NaiveDate,
) -> HashMap<String, u32> {
    let mut stats: HashMap<String, u32> = HashMap::new();
    let mut key = MonthKey::from_date(from);
    let last = MonthKey::from_date(to);

    while key.sort_index() <= last.sort_index() {
        if let Some(sheet) = month::resolve_sheet(wb, key) {
            for row in month::read_rows(sheet) {
                let Some(day) = row.date else { continue };
                if day < from || day > to {
                    continue;
                }
                if let Some(m) = row.morning {
                    *stats.entry(m).or_insert(0) += 1;
                }
                if let Some(a) = row.afternoon {
                    *stats.entry(a).or_insert(0) += 1;
                }
            }
        }

        key = MonthKey::new(
            if key.month == 12 { 1 } else { key.month + 1 },
            if key.month == 12 { key.year + 1 } else { key.year },
        );
    }

    stats
}
