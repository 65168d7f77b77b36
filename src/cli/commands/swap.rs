use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::mutate::MutateLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::outcome::Outcome;
use crate::models::shift::Shift;
use crate::ui::messages::{error, success};
use crate::utils::date;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Swap {
        date1,
        shift1,
        date2,
        shift2,
        actor,
    } = cmd
    else {
        return Ok(());
    };

    let day_a = date::parse_date(date1).ok_or_else(|| AppError::InvalidDate(date1.to_string()))?;
    let day_b = date::parse_date(date2).ok_or_else(|| AppError::InvalidDate(date2.to_string()))?;
    let shift_a =
        Shift::from_code(shift1).ok_or_else(|| AppError::InvalidShift(shift1.to_string()))?;
    let shift_b =
        Shift::from_code(shift2).ok_or_else(|| AppError::InvalidShift(shift2.to_string()))?;

    let doc = super::resolve_document(cli, cfg)?;
    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());
    let mut pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    let actor = actor.clone().unwrap_or_else(|| cfg.default_actor.clone());
    let outcome = MutateLogic::swap(&doc, &mut pool, day_a, shift_a, day_b, shift_b, &actor)?;

    match outcome {
        Outcome::Applied(msg) => success(msg),
        Outcome::Rejected(msg) => error(msg),
    }

    Ok(())
}
