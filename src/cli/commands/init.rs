use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::layout;
use crate::store::workbook::{Cell, Workbook};
use crate::store::{DocumentBackend, JsonBackend};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Initialize configuration, audit database and, when missing, a skeleton
/// roster document holding an empty personnel sheet.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());
    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    let doc_path = match &cli.doc {
        Some(p) => expand_tilde(p),
        None => PathBuf::from(&cfg.schedule_folder).join(
            cfg.master_file
                .as_deref()
                .unwrap_or("duty_roster.json"),
        ),
    };

    if !doc_path.exists() {
        if let Some(parent) = doc_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut wb = Workbook::new();
        let sheet = wb.ensure_sheet(layout::ROSTER_SHEET);
        sheet.set_cell(layout::ROSTER_HEADER_ROW, 0, Cell::text("STT"));
        sheet.set_cell(
            layout::ROSTER_HEADER_ROW,
            layout::ROSTER_COL_NAME,
            Cell::text("Họ tên"),
        );
        sheet.set_cell(
            layout::ROSTER_HEADER_ROW,
            layout::ROSTER_COL_EXEMPT,
            Cell::text("Miễn trực"),
        );

        JsonBackend.save(&wb, &doc_path)?;
        success(format!("Roster document created: {}", doc_path.display()));
    }

    success("Initialization completed.");
    Ok(())
}
