use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let doc = super::resolve_document(cli, cfg)?;
    let wb = doc.open()?;

    let officers = RosterLogic::officer_list(&wb);
    if officers.is_empty() {
        warning("The personnel roster is empty or missing.");
        return Ok(());
    }

    println!("👥 Personnel roster ({} on rotation):\n", officers.len());
    for (i, name) in officers.iter().enumerate() {
        println!("{:>3}. {}", i + 1, name);
    }

    Ok(())
}
