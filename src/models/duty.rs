use chrono::NaiveDate;
use serde::Serialize;

/// One parsed row of a month sheet.
///
/// `date` is the forward-filled calendar date (merged/blank date cells take
/// the nearest prior non-blank value); `None` when the cell held nothing
/// parseable at all. `weekday_label` is read verbatim, never recomputed.
#[derive(Debug, Clone)]
pub struct DutyRow {
    pub date: Option<NaiveDate>,
    pub weekday_label: String,
    pub morning: Option<String>,
    pub afternoon: Option<String>,
    pub leader: Option<String>,
}

impl DutyRow {
    /// A row with all three role cells empty is a non-duty day
    /// (weekend/holiday left unassigned), distinct from a missing row.
    pub fn is_unassigned(&self) -> bool {
        self.morning.is_none() && self.afternoon.is_none() && self.leader.is_none()
    }
}

/// Query result for a single day's assignment.
#[derive(Debug, Clone, Serialize)]
pub struct DutyInfo {
    /// Display string, `dd/mm/yyyy`.
    pub date: String,
    pub day_of_week: String,
    pub is_off: bool,
    pub morning_officer: Option<String>,
    pub afternoon_officer: Option<String>,
    pub leader: Option<String>,
}

impl DutyInfo {
    pub fn off(date: String, day_of_week: String) -> Self {
        Self {
            date,
            day_of_week,
            is_off: true,
            morning_officer: None,
            afternoon_officer: None,
            leader: None,
        }
    }
}
