use crate::core::search::ScheduleRow;
use serde::Serialize;

/// One exported duty day.
#[derive(Debug, Clone, Serialize)]
pub struct DutyExport {
    pub date: String,
    pub day_of_week: String,
    pub morning: String,
    pub afternoon: String,
    pub leader: String,
}

impl From<ScheduleRow> for DutyExport {
    fn from(row: ScheduleRow) -> Self {
        Self {
            date: row.date,
            day_of_week: row.day_of_week,
            morning: row.morning,
            afternoon: row.afternoon,
            leader: row.leader,
        }
    }
}

pub fn get_headers() -> [&'static str; 5] {
    ["date", "day_of_week", "morning", "afternoon", "leader"]
}

pub fn duty_to_row(d: &DutyExport) -> [String; 5] {
    [
        d.date.clone(),
        d.day_of_week.clone(),
        d.morning.clone(),
        d.afternoon.clone(),
        d.leader.clone(),
    ]
}
