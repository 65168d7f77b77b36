use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::outcome::Outcome;
use crate::ui::messages::{error, success};
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let doc = super::resolve_document(cli, cfg)?;

    match ReportLogic::aggregate(&doc)? {
        Outcome::Rejected(msg) => {
            error(msg);
            return Ok(());
        }
        Outcome::Applied(msg) => success(msg),
    }

    // Show what was just written.
    let wb = doc.open()?;
    if let Some((headers, rows)) = ReportLogic::summary_table(&wb) {
        println!();
        let mut table = Table::new(headers);
        for row in rows {
            table.add_row(row);
        }
        print!("{}", table.render());
    }

    Ok(())
}
