use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        let path = Config::config_file();
        if path.exists() {
            println!("{}", fs::read_to_string(&path)?);
        } else {
            warning(format!(
                "No configuration file at {:?}; defaults are in effect. Run 'init' to create it.",
                path
            ));
        }
    }

    Ok(())
}
