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
    let Commands::Reassign {
        date: date_arg,
        shift,
        new_officer,
        old_officer,
        reason,
        actor,
    } = cmd
    else {
        return Ok(());
    };

    //
    // 1. Validate inputs before touching the document
    //
    let day =
        date::parse_date(date_arg).ok_or_else(|| AppError::InvalidDate(date_arg.to_string()))?;
    let shift =
        Shift::from_code(shift).ok_or_else(|| AppError::InvalidShift(shift.to_string()))?;

    //
    // 2. Open document + audit DB
    //
    let doc = super::resolve_document(cli, cfg)?;
    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());
    let mut pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    //
    // 3. Execute
    //
    let actor = actor.clone().unwrap_or_else(|| cfg.default_actor.clone());
    let outcome = MutateLogic::reassign(
        &doc,
        &mut pool,
        day,
        shift,
        new_officer,
        old_officer.as_deref(),
        reason,
        &actor,
    )?;

    match outcome {
        Outcome::Applied(msg) => success(msg),
        Outcome::Rejected(msg) => error(msg),
    }

    Ok(())
}
