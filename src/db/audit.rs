use crate::errors::AppResult;
use crate::models::change::ChangeRecord;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Append one shift-change record to the audit log.
pub fn log_change(conn: &Connection, record: &ChangeRecord) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO schedule_change_log
            (change_date, duty_date, shift, old_officer, new_officer, reason, approved_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    stmt.execute(params![
        record.timestamp,
        record.duty_date,
        record.shift,
        record.old_officer,
        record.new_officer,
        record.reason,
        record.approved_by,
    ])?;

    Ok(())
}

/// Append one notification-attempt record.
pub fn log_notification(
    conn: &Connection,
    date: &str,
    shift: &str,
    officer: &str,
    status: &str,
    detail: &str,
) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO notification_log
            (date, shift, officer_name, notification_time, status, message)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    stmt.execute(params![date, shift, officer, now, status, detail])?;

    Ok(())
}
