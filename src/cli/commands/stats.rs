use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::report;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Stats { from, to } = cmd else {
        return Ok(());
    };

    let from_day =
        date::parse_date(from).ok_or_else(|| AppError::InvalidDate(from.to_string()))?;
    let to_day = date::parse_date(to).ok_or_else(|| AppError::InvalidDate(to.to_string()))?;

    if from_day > to_day {
        return Err(AppError::InvalidDate(format!(
            "range start {} is after range end {}",
            from, to
        )));
    }

    let doc = super::resolve_document(cli, cfg)?;
    let wb = doc.open()?;

    let stats = report::statistics(&wb, from_day, to_day);
    if stats.is_empty() {
        warning("No duty shifts found in the selected range.");
        return Ok(());
    }

    // Busiest first, name as tie-breaker.
    let mut entries: Vec<(String, u32)> = stats.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    println!(
        "📊 Duty shifts from {} to {}:\n",
        date::display_date(from_day),
        date::display_date(to_day)
    );

    let mut table = Table::new(vec!["Officer", "Shifts"]);
    for (name, count) in entries {
        table.add_row(vec![name, count.to_string()]);
    }
    print!("{}", table.render());

    Ok(())
}
