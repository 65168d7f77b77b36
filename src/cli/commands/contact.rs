use crate::cli::parser::{Cli, Commands, ContactAction};
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{self, Contact};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, GREY, RESET};

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Contact { action } = cmd else {
        return Ok(());
    };

    let db_path = cli.db.clone().unwrap_or_else(|| cfg.database.clone());
    let mut pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    match action {
        ContactAction::Set {
            name,
            telegram,
            phone,
            email,
        } => {
            queries::upsert_contact(
                &mut pool,
                &Contact {
                    name: name.clone(),
                    telegram_id: telegram.clone(),
                    phone: phone.clone(),
                    email: email.clone(),
                },
            )?;
            success(format!("Contact saved for '{}'", name));
        }
        ContactAction::Show { name } => match queries::contact_by_name(&mut pool, name)? {
            Some(contact) => {
                println!("👤 {}", contact.name);
                print_field("Telegram", &contact.telegram_id);
                print_field("Phone", &contact.phone);
                print_field("Email", &contact.email);
            }
            None => warning(format!("No contact found for '{}'", name)),
        },
    }

    Ok(())
}

fn print_field(label: &str, value: &Option<String>) {
    match value {
        Some(v) => println!("   {}{:<9}{} {}", CYAN, label, RESET, v),
        None => println!("   {}{:<9}{} {}-{}", CYAN, label, RESET, GREY, RESET),
    }
}
