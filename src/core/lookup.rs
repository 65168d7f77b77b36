use crate::core::month;
use crate::models::duty::DutyInfo;
use crate::models::month_key::MonthKey;
use crate::store::workbook::Workbook;
use crate::utils::date;
use chrono::NaiveDate;

/// Result of a single-day lookup. The two negative flavors stay distinct:
/// `NoSheet` = no schedule configured for that month, `NoRow` = the month
/// sheet exists but the date is not in it.
#[derive(Debug)]
pub enum DutyQuery {
    Found(DutyInfo),
    NoSheet(MonthKey),
    NoRow,
}

pub struct DutyLogic;

impl DutyLogic {
    pub fn duty_for_date(wb: &Workbook, day: NaiveDate) -> DutyQuery {
        let key = MonthKey::from_date(day);

        let Some(sheet) = month::resolve_sheet(wb, key) else {
            return DutyQuery::NoSheet(key);
        };

        let Some(row) = month::read_rows(sheet)
            .into_iter()
            .find(|r| r.date == Some(day))
        else {
            return DutyQuery::NoRow;
        };

        // All three role cells empty: a non-duty day (weekend/holiday left
        // unassigned), reported as "off" rather than not-found.
        if row.is_unassigned() {
            return DutyQuery::Found(DutyInfo::off(date::display_date(day), row.weekday_label));
        }

        DutyQuery::Found(DutyInfo {
            date: date::display_date(day),
            day_of_week: row.weekday_label,
            is_off: false,
            morning_officer: row.morning,
            afternoon_officer: row.afternoon,
            leader: row.leader,
        })
    }
}
