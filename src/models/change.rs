use chrono::Local;
use serde::Serialize;

/// Audit record of one shift change. Append-only: the core never mutates or
/// deletes rows of the change log.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRecord {
    /// Duty date as display string `dd/mm/yyyy`.
    pub duty_date: String,
    pub shift: String,
    pub old_officer: String,
    pub new_officer: String,
    pub reason: String,
    pub approved_by: String,
    /// RFC3339 timestamp of when the change was recorded.
    pub timestamp: String,
}

impl ChangeRecord {
    pub fn new(
        duty_date: &str,
        shift: &str,
        old_officer: Option<&str>,
        new_officer: &str,
        reason: &str,
        approved_by: &str,
    ) -> Self {
        Self {
            duty_date: duty_date.to_string(),
            shift: shift.to_string(),
            old_officer: old_officer.unwrap_or("N/A").to_string(),
            new_officer: new_officer.to_string(),
            reason: reason.to_string(),
            approved_by: approved_by.to_string(),
            timestamp: Local::now().to_rfc3339(),
        }
    }
}
