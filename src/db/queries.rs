use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, params};

/// One row of the change history, ready for display.
#[derive(Debug, Clone)]
pub struct ChangeEntry {
    pub id: i64,
    pub change_date: String,
    pub duty_date: String,
    pub shift: String,
    pub old_officer: String,
    pub new_officer: String,
    pub reason: String,
    pub approved_by: String,
}

/// One row of the notification history.
#[derive(Debug, Clone)]
pub struct NotificationEntry {
    pub id: i64,
    pub date: String,
    pub shift: String,
    pub officer_name: String,
    pub notification_time: String,
    pub status: String,
    pub message: String,
}

/// Contact details of one officer.
#[derive(Debug, Clone)]
pub struct Contact {
    pub name: String,
    pub telegram_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

pub fn change_history(pool: &mut DbPool, limit: usize) -> AppResult<Vec<ChangeEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, change_date, duty_date, shift, old_officer, new_officer, reason, approved_by
         FROM schedule_change_log
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit as i64], |row| {
        Ok(ChangeEntry {
            id: row.get(0)?,
            change_date: row.get(1)?,
            duty_date: row.get(2)?,
            shift: row.get(3)?,
            old_officer: row.get(4)?,
            new_officer: row.get(5)?,
            reason: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            approved_by: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn notification_history(pool: &mut DbPool, limit: usize) -> AppResult<Vec<NotificationEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, date, shift, officer_name, notification_time, status, message
         FROM notification_log
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit as i64], |row| {
        Ok(NotificationEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            shift: row.get(2)?,
            officer_name: row.get(3)?,
            notification_time: row.get(4)?,
            status: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            message: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert or replace an officer's contact details.
pub fn upsert_contact(pool: &mut DbPool, contact: &Contact) -> AppResult<()> {
    pool.conn.execute(
        "INSERT OR REPLACE INTO officers_contact (name, telegram_id, phone, email)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            contact.name,
            contact.telegram_id,
            contact.phone,
            contact.email
        ],
    )?;
    Ok(())
}

pub fn contact_by_name(pool: &mut DbPool, name: &str) -> AppResult<Option<Contact>> {
    let mut stmt = pool.conn.prepare(
        "SELECT name, telegram_id, phone, email FROM officers_contact WHERE name = ?1",
    )?;

    let contact = stmt
        .query_row([name], |row| {
            Ok(Contact {
                name: row.get(0)?,
                telegram_id: row.get(1)?,
                phone: row.get(2)?,
                email: row.get(3)?,
            })
        })
        .optional()?;

    Ok(contact)
}
