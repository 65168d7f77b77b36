use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::lookup::{DutyLogic, DutyQuery};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Duty {
        date: date_arg,
        tomorrow,
    } = cmd
    else {
        return Ok(());
    };

    let day = match date_arg {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None if *tomorrow => date::tomorrow(),
        None => date::today(),
    };

    let doc = super::resolve_document(cli, cfg)?;
    let wb = doc.open()?;

    match DutyLogic::duty_for_date(&wb, day) {
        DutyQuery::NoSheet(key) => {
            warning(format!("No schedule sheet found for month {}", key));
        }
        DutyQuery::NoRow => {
            warning(format!(
                "Date {} not found in the schedule",
                date::display_date(day)
            ));
        }
        DutyQuery::Found(info) if info.is_off => {
            println!(
                "💤 {} ({}) is an off day, no assignments.",
                info.date, info.day_of_week
            );
        }
        DutyQuery::Found(info) => {
            println!("📅 Duty for {} ({}):", info.date, info.day_of_week);
            print_role("Morning", &info.morning_officer);
            print_role("Afternoon", &info.afternoon_officer);
            print_role("Leader", &info.leader);
        }
    }

    Ok(())
}

fn print_role(label: &str, officer: &Option<String>) {
    match officer {
        Some(name) => println!("   {}{:<10}{} {}", CYAN, label, RESET, name),
        None => println!("   {}{:<10}{} {}-{}", CYAN, label, RESET, GREY, RESET),
    }
}
