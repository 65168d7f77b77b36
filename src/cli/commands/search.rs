use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::search::SearchLogic;
use crate::errors::{AppError, AppResult};
use crate::models::month_key::MonthKey;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Search { name, month } = cmd else {
        return Ok(());
    };

    let key = match month {
        Some(m) => MonthKey::parse(m).ok_or_else(|| AppError::InvalidMonthKey(m.to_string()))?,
        None => MonthKey::from_date(date::today()),
    };

    let doc = super::resolve_document(cli, cfg)?;
    let wb = doc.open()?;

    match name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(query) => {
            let Some(hits) = SearchLogic::find_by_name(&wb, key, query) else {
                warning(format!("No schedule sheet found for month {}", key));
                return Ok(());
            };

            if hits.is_empty() {
                warning(format!("No duty days found for '{}' in {}", query, key));
                return Ok(());
            }

            println!("🔎 Duty days for '{}' in {}:\n", query, key);
            let mut table = Table::new(vec!["Date", "Day", "Roles"]);
            for hit in hits {
                table.add_row(vec![hit.date, hit.day_of_week, hit.roles.join(", ")]);
            }
            print!("{}", table.render());
        }
        None => {
            let Some(rows) = SearchLogic::month_listing(&wb, key) else {
                warning(format!("No schedule sheet found for month {}", key));
                return Ok(());
            };

            if rows.is_empty() {
                warning(format!("No duty rows found in {}", key));
                return Ok(());
            }

            println!("📅 Schedule for {}:\n", key);
            let mut table = Table::new(vec!["Date", "Day", "Morning", "Afternoon", "Leader"]);
            for row in rows {
                table.add_row(vec![
                    row.date,
                    row.day_of_week,
                    row.morning,
                    row.afternoon,
                    row.leader,
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
