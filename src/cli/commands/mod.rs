pub mod backup;
pub mod config;
pub mod contact;
pub mod duty;
pub mod export;
pub mod init;
pub mod log;
pub mod reassign;
pub mod report;
pub mod roster;
pub mod schedule;
pub mod search;
pub mod stats;
pub mod swap;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{Document, locator};
use crate::utils::path::expand_tilde;

/// Resolve the roster document for a command: the `--doc` override wins,
/// otherwise the locator walks the configured schedule folder.
pub fn resolve_document(cli: &Cli, cfg: &Config) -> AppResult<Document> {
    if let Some(path) = &cli.doc {
        return Ok(Document::new(expand_tilde(path)));
    }

    match locator::master_document_path(cfg) {
        Some(path) => Ok(Document::new(path)),
        None => Err(AppError::DocumentMissing(format!(
            "no roster document in {}",
            cfg.schedule_folder
        ))),
    }
}
