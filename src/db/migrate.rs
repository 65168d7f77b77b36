//! Schema migrations for the audit database, gated on `PRAGMA user_version`.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const SCHEMA_VERSION: i64 = 1;

/// Run every pending migration. Idempotent: a database already at the
/// current version is left untouched.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if version > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "Database schema version {} is newer than this build supports ({})",
            version, SCHEMA_VERSION
        )));
    }

    if version < 1 {
        migrate_to_v1(conn)?;
    }

    Ok(())
}

/// v1: the three audit tables.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        BEGIN;

        CREATE TABLE IF NOT EXISTS schedule_change_log (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            change_date  TEXT NOT NULL,
            duty_date    TEXT NOT NULL,
            shift        TEXT NOT NULL CHECK(shift IN ('morning','afternoon')),
            old_officer  TEXT NOT NULL,
            new_officer  TEXT NOT NULL,
            reason       TEXT DEFAULT '',
            approved_by  TEXT DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS notification_log (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            date              TEXT NOT NULL,
            shift             TEXT NOT NULL,
            officer_name      TEXT NOT NULL,
            notification_time TEXT NOT NULL,
            status            TEXT,
            message           TEXT
        );

        CREATE TABLE IF NOT EXISTS officers_contact (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT UNIQUE NOT NULL,
            telegram_id TEXT,
            phone       TEXT,
            email       TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_change_log_duty_date
            ON schedule_change_log(duty_date);
        CREATE INDEX IF NOT EXISTS idx_notification_log_date
            ON notification_log(date);

        PRAGMA user_version = 1;

        COMMIT;
        "#,
    )?;
    Ok(())
}
