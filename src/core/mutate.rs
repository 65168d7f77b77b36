//! In-place shift reassignment and two-shift swap.
//!
//! Both operations compute every cell change in memory, persist the
//! document once, and only then append their audit records. A failed
//! persist leaves the document untouched and writes no audit row.

use crate::core::month;
use crate::db::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::change::ChangeRecord;
use crate::models::month_key::MonthKey;
use crate::models::outcome::Outcome;
use crate::models::shift::Shift;
use crate::store::Document;
use crate::store::workbook::Cell;
use crate::utils::date;
use chrono::NaiveDate;

/// Reason recorded on both sides of a swap.
const SWAP_REASON: &str = "cross-swap";

pub struct MutateLogic;

impl MutateLogic {
    /// Overwrite the one role cell of `shift` on `day` with `new_officer`.
    ///
    /// `old_hint` is used for the audit record when given; otherwise the
    /// pre-overwrite cell value is captured as the old value.
    pub fn reassign(
        doc: &Document,
        pool: &mut DbPool,
        day: NaiveDate,
        shift: Shift,
        new_officer: &str,
        old_hint: Option<&str>,
        reason: &str,
        actor: &str,
    ) -> AppResult<Outcome> {
        let mut wb = doc.open()?;

        let key = MonthKey::from_date(day);
        let Some(sheet_name) = month::resolve_sheet_name(&wb, key) else {
            return Ok(Outcome::rejected(format!(
                "No schedule sheet found for month {}",
                key
            )));
        };

        let target = date::display_date(day);
        let sheet = wb.sheet_mut(&sheet_name).unwrap();

        let Some(row) = month::find_row_by_display_date(sheet, &target) else {
            return Ok(Outcome::rejected(format!(
                "Date {} not found in sheet {}",
                target, sheet_name
            )));
        };

        let old_value = sheet.cell(row, shift.column()).as_text();
        sheet.set_cell(row, shift.column(), Cell::text(new_officer));

        doc.persist(&wb)?;

        let record = ChangeRecord::new(
            &target,
            shift.to_db_str(),
            old_hint.or(old_value.as_deref()),
            new_officer,
            reason,
            actor,
        );
        audit::log_change(&pool.conn, &record)?;

        Ok(Outcome::applied(format!(
            "Reassigned {} shift on {} to '{}'",
            shift, target, new_officer
        )))
    }

    /// Exchange the officers of two (date, shift) cells, possibly across
    /// month sheets. Swapping a cell with itself is a harmless no-op.
    pub fn swap(
        doc: &Document,
        pool: &mut DbPool,
        day_a: NaiveDate,
        shift_a: Shift,
        day_b: NaiveDate,
        shift_b: Shift,
        actor: &str,
    ) -> AppResult<Outcome> {
        let mut wb = doc.open()?;

        let Some(sheet_a) = month::resolve_sheet_name(&wb, MonthKey::from_date(day_a)) else {
            return Ok(Outcome::rejected(format!(
                "No schedule sheet found for month {}",
                MonthKey::from_date(day_a)
            )));
        };
        let Some(sheet_b) = month::resolve_sheet_name(&wb, MonthKey::from_date(day_b)) else {
            return Ok(Outcome::rejected(format!(
                "No schedule sheet found for month {}",
                MonthKey::from_date(day_b)
            )));
        };

        let target_a = date::display_date(day_a);
        let target_b = date::display_date(day_b);

        let Some(row_a) = month::find_row_by_display_date(wb.sheet(&sheet_a).unwrap(), &target_a)
        else {
            return Ok(Outcome::rejected(format!(
                "Date {} not found in sheet {}",
                target_a, sheet_a
            )));
        };
        let Some(row_b) = month::find_row_by_display_date(wb.sheet(&sheet_b).unwrap(), &target_b)
        else {
            return Ok(Outcome::rejected(format!(
                "Date {} not found in sheet {}",
                target_b, sheet_b
            )));
        };

        let officer_a = wb
            .sheet(&sheet_a)
            .unwrap()
            .cell(row_a, shift_a.column())
            .as_text();
        let officer_b = wb
            .sheet(&sheet_b)
            .unwrap()
            .cell(row_b, shift_b.column())
            .as_text();

        // Crossed write: each side takes the other's value, empties included.
        wb.sheet_mut(&sheet_a)
            .unwrap()
            .set_cell(row_a, shift_a.column(), to_cell(&officer_b));
        wb.sheet_mut(&sheet_b)
            .unwrap()
            .set_cell(row_b, shift_b.column(), to_cell(&officer_a));

        doc.persist(&wb)?;

        // One audit record per side.
        audit::log_change(
            &pool.conn,
            &ChangeRecord::new(
                &target_a,
                shift_a.to_db_str(),
                officer_a.as_deref(),
                officer_b.as_deref().unwrap_or(""),
                SWAP_REASON,
                actor,
            ),
        )?;
        audit::log_change(
            &pool.conn,
            &ChangeRecord::new(
                &target_b,
                shift_b.to_db_str(),
                officer_b.as_deref(),
                officer_a.as_deref().unwrap_or(""),
                SWAP_REASON,
                actor,
            ),
        )?;

        Ok(Outcome::applied(format!(
            "Swapped '{}' ({} {}) with '{}' ({} {})",
            officer_a.as_deref().unwrap_or("-"),
            target_a,
            shift_a,
            officer_b.as_deref().unwrap_or("-"),
            target_b,
            shift_b
        )))
    }
}

fn to_cell(value: &Option<String>) -> Cell {
    match value {
        Some(v) => Cell::text(v.clone()),
        None => Cell::Empty,
    }
}
