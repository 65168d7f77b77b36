use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::month_key::MonthKey;
use crate::utils::date;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let key = match month {
            Some(m) => {
                MonthKey::parse(m).ok_or_else(|| AppError::InvalidMonthKey(m.to_string()))?
            }
            None => MonthKey::from_date(date::today()),
        };

        let doc = super::resolve_document(cli, cfg)?;
        ExportLogic::export(&doc, format.clone(), file, key, *force)?;
    }

    Ok(())
}
