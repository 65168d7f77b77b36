//! Round-robin auto-scheduler.
//!
//! Fills an entire month sheet from an ordered personnel list and an
//! ordered leader list. Two independent rotating cursors drive the
//! assignment: the person cursor advances by 2 per processed weekday (one
//! morning slot, one afternoon slot), the leader cursor by 1 and restarts
//! at the head of the list every Monday. Saturdays and Sundays are written
//! empty and advance nothing.

use crate::core::month;
use crate::core::roster::RosterLogic;
use crate::errors::AppResult;
use crate::models::outcome::Outcome;
use crate::models::roster_config::RosterConfig;
use crate::store::Document;
use crate::store::layout;
use crate::store::workbook::Cell;
use chrono::{Datelike, NaiveDate};

pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Rotation slot for a cursor value.
    ///
    /// With an even list a plain `cursor % n` pairs the same two people
    /// morning/afternoon every single day; skipping one extra step every
    /// `n` cursor increments breaks that parity. Legacy tables were
    /// produced with this exact correction, so it must not be simplified.
    pub fn slot(cursor: usize, n: usize) -> usize {
        let extra = if n % 2 == 0 { cursor / n } else { 0 };
        (cursor + extra) % n
    }

    /// Cursor value that resumes the rotation right after the person at
    /// `last_idx`, who held the previous month's final afternoon slot:
    /// replay the slot formula until the afternoon slot lands on
    /// `last_idx`, then step two past it.
    fn continuation_cursor(last_idx: usize, n: usize) -> usize {
        for cursor in 0..(n * 2) {
            if Self::slot(cursor + 1, n) == last_idx {
                return cursor + 2;
            }
        }
        0
    }

    /// Generate (or regenerate) the month sheet described by `cfg`.
    ///
    /// This is a destructive regenerate: the data region is cleared and the
    /// title and header rows rewritten unconditionally. The sheet is
    /// created lazily when missing.
    pub fn generate(doc: &Document, cfg: &RosterConfig) -> AppResult<Outcome> {
        if cfg.leaders.is_empty() {
            return Ok(Outcome::rejected("The leader list must not be empty"));
        }
        if cfg.explicit_names && cfg.personnel.is_empty() {
            return Ok(Outcome::rejected("The personnel list must not be empty"));
        }

        let mut wb = doc.open()?;

        let personnel = if cfg.personnel.is_empty() {
            RosterLogic::officer_list(&wb)
        } else {
            cfg.personnel.clone()
        };
        if personnel.is_empty() {
            return Ok(Outcome::rejected(format!(
                "No personnel available: the '{}' sheet is missing or empty",
                layout::ROSTER_SHEET
            )));
        }

        let n = personnel.len();
        let k = cfg.leaders.len();

        //
        // 1. Initial person cursor: explicit start name, or continuation
        //    from the previous month, or 0.
        //
        let mut person_cursor = 0usize;
        let mut anchored = false;

        if let Some(start) = &cfg.start_name {
            let needle = start.trim().to_lowercase();
            let found = personnel.iter().position(|name| {
                let lower = name.to_lowercase();
                lower.contains(&needle) || needle.contains(&lower)
            });

            match found {
                // For cursors below n the slot formula is the identity, so
                // anchoring the cursor at the index puts the start name on
                // the first morning slot.
                Some(idx) => {
                    person_cursor = idx;
                    anchored = true;
                }
                None => {
                    return Ok(Outcome::rejected(format!(
                        "'{}' not found in the personnel list",
                        start
                    )));
                }
            }
        }

        if !anchored && !cfg.explicit_names {
            person_cursor = Self::continuation_from_previous(&wb, cfg, &personnel);
        }

        //
        // 2. Rebuild the sheet: keep an existing sheet's name (canonical or
        //    padded), otherwise create the canonical one.
        //
        let sheet_name = month::resolve_sheet_name(&wb, cfg.month_key)
            .unwrap_or_else(|| cfg.month_key.canonical());
        let sheet = wb.ensure_sheet(&sheet_name);
        sheet.clear_rows_from(layout::DATA_START_ROW);

        sheet.set_cell(
            layout::TITLE_ROW,
            0,
            Cell::text(layout::month_title(cfg.month_key.month, cfg.month_key.year)),
        );
        for (col, header) in layout::MONTH_HEADERS.iter().enumerate() {
            sheet.set_cell(layout::HEADER_ROW, col, Cell::text(*header));
        }

        //
        // 3. Walk the calendar days.
        //
        let mut leader_cursor = 0usize;
        let mut weekdays = 0usize;
        let mut row = layout::DATA_START_ROW;

        for day in 1..=cfg.month_key.days_in_month() {
            let date = NaiveDate::from_ymd_opt(cfg.month_key.year, cfg.month_key.month, day)
                .expect("valid day of month");
            let weekday = date.weekday().num_days_from_monday() as usize;

            // Leaders restart their rotation every Monday.
            if weekday == 0 {
                leader_cursor = 0;
            }

            sheet.set_cell(row, layout::COL_DATE, Cell::Date(date));
            sheet.set_cell(
                row,
                layout::COL_WEEKDAY,
                Cell::text(layout::DAY_NAMES[weekday]),
            );

            if weekday < 5 {
                let morning = &personnel[Self::slot(person_cursor, n)];
                let afternoon = &personnel[Self::slot(person_cursor + 1, n)];

                sheet.set_cell(row, layout::COL_MORNING, Cell::text(morning.clone()));
                sheet.set_cell(row, layout::COL_AFTERNOON, Cell::text(afternoon.clone()));
                sheet.set_cell(
                    row,
                    layout::COL_LEADER,
                    Cell::text(cfg.leaders[leader_cursor % k].clone()),
                );

                person_cursor += 2;
                leader_cursor += 1;
                weekdays += 1;
            } else {
                // Weekend: three empty role cells, cursors untouched.
                sheet.set_cell(row, layout::COL_MORNING, Cell::Empty);
                sheet.set_cell(row, layout::COL_AFTERNOON, Cell::Empty);
                sheet.set_cell(row, layout::COL_LEADER, Cell::Empty);
            }

            row += 1;
        }

        doc.persist(&wb)?;

        Ok(Outcome::applied(format!(
            "Schedule generated for {}: {} weekdays, {} personnel, {} leaders",
            cfg.month_key, weekdays, n, k
        )))
    }

    /// Continuation cursor from the previous month's sheet: scan it from
    /// the last row upward for the most recent non-empty afternoon value;
    /// when that name is in the current personnel list, resume right after
    /// it. Falls back to 0 otherwise.
    fn continuation_from_previous(
        wb: &crate::store::workbook::Workbook,
        cfg: &RosterConfig,
        personnel: &[String],
    ) -> usize {
        let Some(prev_sheet) = month::resolve_sheet(wb, cfg.month_key.prev()) else {
            return 0;
        };

        let mut last_afternoon = None;
        for r in (layout::DATA_START_ROW..prev_sheet.row_count()).rev() {
            if let Some(v) = prev_sheet.cell(r, layout::COL_AFTERNOON).as_text() {
                last_afternoon = Some(v);
                break;
            }
        }

        let Some(name) = last_afternoon else { return 0 };
        let Some(last_idx) = personnel.iter().position(|p| *p == name) else {
            return 0;
        };

        Self::continuation_cursor(last_idx, personnel.len())
    }
}
