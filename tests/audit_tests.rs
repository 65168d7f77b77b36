mod common;

use common::setup_test_db;
use rdutyroster::db::audit;
use rdutyroster::db::initialize::init_db;
use rdutyroster::db::pool::DbPool;
use rdutyroster::db::queries;
use rdutyroster::models::change::ChangeRecord;

#[test]
fn test_change_log_roundtrip() {
    let db_path = setup_test_db("audit_change");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");

    let record = ChangeRecord::new(
        "01/08/2025",
        "morning",
        Some("An"),
        "Bich",
        "sick leave",
        "admin",
    );
    audit::log_change(&pool.conn, &record).expect("log change");

    let history = queries::change_history(&mut pool, 10).expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].duty_date, "01/08/2025");
    assert_eq!(history[0].old_officer, "An");
    assert_eq!(history[0].new_officer, "Bich");
}

#[test]
fn test_change_record_defaults_missing_old_officer() {
    let record = ChangeRecord::new("01/08/2025", "afternoon", None, "Bich", "", "");
    assert_eq!(record.old_officer, "N/A");
}

#[test]
fn test_notification_log_roundtrip() {
    let db_path = setup_test_db("audit_notification");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");

    audit::log_notification(
        &pool.conn,
        "01/08/2025",
        "morning",
        "An",
        "sent",
        "reminder delivered",
    )
    .expect("log notification");

    let history = queries::notification_history(&mut pool, 10).expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].officer_name, "An");
    assert_eq!(history[0].status, "sent");
}

#[test]
fn test_migrations_are_idempotent() {
    let db_path = setup_test_db("audit_migrate_twice");
    let pool = DbPool::new(&db_path).expect("open db");

    init_db(&pool.conn).expect("first init");
    init_db(&pool.conn).expect("second init");

    let version: i64 = pool
        .conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .expect("user_version");
    assert_eq!(version, 1);
}
