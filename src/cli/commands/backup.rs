use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let doc = super::resolve_document(cli, cfg)?;
        let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());

        BackupLogic::backup(doc.path(), Path::new(&db_path), file, *compress)?;
    }

    Ok(())
}
