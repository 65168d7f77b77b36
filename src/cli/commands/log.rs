use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Shift gets its own colour so mixed histories scan quickly.
fn color_for_shift(shift: &str) -> Colour {
    match shift {
        "morning" => Colour::Yellow,
        "afternoon" => Colour::Blue,
        _ => Colour::White,
    }
}

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log {
        notifications,
        limit,
    } = cmd
    else {
        return Ok(());
    };

    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());
    let mut pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    if *notifications {
        print_notifications(&mut pool, *limit)?;
    } else {
        print_changes(&mut pool, *limit)?;
    }

    Ok(())
}

fn print_changes(pool: &mut DbPool, limit: usize) -> AppResult<()> {
    let entries = queries::change_history(pool, limit)?;
    if entries.is_empty() {
        println!("📜 Change log is empty.");
        return Ok(());
    }

    println!("📜 Schedule change log:\n");

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries.iter().map(|e| e.duty_date.len()).max().unwrap_or(10);

    for e in entries {
        let shift_colored = color_for_shift(&e.shift).paint(e.shift.as_str()).to_string();
        // pad on the visible width, the ANSI codes don't count
        let pad = " ".repeat(9usize.saturating_sub(strip_ansi(&shift_colored).len()));

        let reason = if e.reason.is_empty() {
            String::new()
        } else {
            format!(" ({})", e.reason)
        };

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} '{}' => '{}'{} by {}",
            e.id,
            e.duty_date,
            shift_colored,
            pad,
            e.old_officer,
            e.new_officer,
            reason,
            if e.approved_by.is_empty() {
                "-"
            } else {
                &e.approved_by
            },
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}

fn print_notifications(pool: &mut DbPool, limit: usize) -> AppResult<()> {
    let entries = queries::notification_history(pool, limit)?;
    if entries.is_empty() {
        println!("📜 Notification log is empty.");
        return Ok(());
    }

    println!("📜 Notification log:\n");

    for e in entries {
        println!(
            "{:>4}: {} | {} {} => {} [{}] {}",
            e.id, e.notification_time, e.date, e.shift, e.officer_name, e.status, e.message
        );
    }

    Ok(())
}
