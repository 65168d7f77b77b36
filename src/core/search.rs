//! Name and month filtering over one month sheet.

use crate::core::month;
use crate::models::month_key::MonthKey;
use crate::store::workbook::Workbook;
use crate::utils::date;

/// Placeholder values that never count as a person in listing mode.
const SENTINELS: [&str; 3] = ["x", "-", "nan"];

/// One day matched by a name query, with the roles the name appeared in.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub date: String,
    pub day_of_week: String,
    pub roles: Vec<&'static str>,
}

/// One populated day of the month listing.
#[derive(Debug, Clone)]
pub struct ScheduleRow {
    pub date: String,
    pub day_of_week: String,
    pub morning: String,
    pub afternoon: String,
    pub leader: String,
}

pub struct SearchLogic;

impl SearchLogic {
    /// Days on which `query` appears in any role, matched by
    /// case-insensitive substring per field. Rows whose date does not
    /// parse are skipped. `None` = month sheet not found.
    pub fn find_by_name(wb: &Workbook, key: MonthKey, query: &str) -> Option<Vec<SearchHit>> {
        let sheet = month::resolve_sheet(wb, key)?;
        let needle = query.trim().to_lowercase();

        let mut hits = Vec::new();
        for row in month::read_rows(sheet) {
            let Some(day) = row.date else { continue };

            let mut roles = Vec::new();
            if contains(&row.morning, &needle) {
                roles.push("morning");
            }
            if contains(&row.afternoon, &needle) {
                roles.push("afternoon");
            }
            if contains(&row.leader, &needle) {
                roles.push("leader");
            }

            if !roles.is_empty() {
                hits.push(SearchHit {
                    date: date::display_date(day),
                    day_of_week: row.weekday_label.clone(),
                    roles,
                });
            }
        }

        Some(hits)
    }

    /// Every row of the month that has at least one non-sentinel role
    /// value. `None` = month sheet not found.
    pub fn month_listing(wb: &Workbook, key: MonthKey) -> Option<Vec<ScheduleRow>> {
        let sheet = month::resolve_sheet(wb, key)?;

        let mut out = Vec::new();
        for row in month::read_rows(sheet) {
            let Some(day) = row.date else { continue };

            let morning = clean(&row.morning);
            let afternoon = clean(&row.afternoon);
            let leader = clean(&row.leader);

            if morning.is_empty() && afternoon.is_empty() && leader.is_empty() {
                continue;
            }

            out.push(ScheduleRow {
                date: date::display_date(day),
                day_of_week: row.weekday_label.clone(),
                morning,
                afternoon,
                leader,
            });
        }

        Some(out)
    }
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Sentinel values render as empty strings.
fn clean(field: &Option<String>) -> String {
    match field.as_deref() {
        Some(v) if !SENTINELS.contains(&v.to_lowercase().as_str()) => v.to_string(),
        _ => String::new(),
    }
}
