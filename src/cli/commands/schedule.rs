use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::errors::{AppError, AppResult};
use crate::models::month_key::MonthKey;
use crate::models::outcome::Outcome;
use crate::models::roster_config::RosterConfig;
use crate::ui::messages::{error, success};

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Schedule {
        month,
        names,
        leaders,
        start,
    } = cmd
    else {
        return Ok(());
    };

    let key =
        MonthKey::parse(month).ok_or_else(|| AppError::InvalidMonthKey(month.to_string()))?;

    let personnel: Vec<String> = names
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    let leaders: Vec<String> = leaders
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();

    let roster_cfg = RosterConfig {
        month_key: key,
        explicit_names: !personnel.is_empty(),
        personnel,
        leaders,
        start_name: start.clone(),
    };

    let doc = super::resolve_document(cli, cfg)?;
    let outcome = ScheduleLogic::generate(&doc, &roster_cfg)?;

    match outcome {
        Outcome::Applied(msg) => success(msg),
        Outcome::Rejected(msg) => error(msg),
    }

    Ok(())
}
