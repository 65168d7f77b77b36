use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rdutyroster
/// CLI application to manage a monthly duty roster with audit logging
#[derive(Parser)]
#[command(
    name = "rdutyroster",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage a monthly duty roster: lookups, shift changes, round-robin scheduling, reports",
    long_about = None
)]
pub struct Cli {
    /// Override audit database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override roster document path (skips folder resolution)
    #[arg(global = true, long = "doc")]
    pub doc: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, roster folder and audit database
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Show the duty assignment of a single day
    Duty {
        /// Date to look up (YYYY-MM-DD); defaults to today
        date: Option<String>,

        #[arg(long = "tomorrow", conflicts_with = "date")]
        tomorrow: bool,
    },

    /// Reassign one shift to a different officer
    Reassign {
        /// Duty date (YYYY-MM-DD)
        date: String,

        /// Shift: morning | afternoon
        shift: String,

        /// Officer taking over the shift
        new_officer: String,

        #[arg(long = "old", help = "Officer being replaced (for the audit record)")]
        old_officer: Option<String>,

        #[arg(long = "reason", default_value = "", help = "Reason recorded in the audit log")]
        reason: String,

        #[arg(long = "by", help = "Who approved the change")]
        actor: Option<String>,
    },

    /// Swap two duty shifts, possibly across months
    Swap {
        /// First duty date (YYYY-MM-DD)
        date1: String,
        /// First shift: morning | afternoon
        shift1: String,
        /// Second duty date (YYYY-MM-DD)
        date2: String,
        /// Second shift: morning | afternoon
        shift2: String,

        #[arg(long = "by", help = "Who approved the swap")]
        actor: Option<String>,
    },

    /// Auto-generate a month's schedule (round-robin rotation)
    Schedule {
        /// Month key, m-yyyy (e.g. 8-2025)
        month: String,

        #[arg(
            long = "names",
            value_delimiter = ',',
            help = "Override personnel list (comma separated); default: roster sheet"
        )]
        names: Vec<String>,

        #[arg(
            long = "leaders",
            value_delimiter = ',',
            help = "Leader rotation (comma separated), restarts every Monday"
        )]
        leaders: Vec<String>,

        #[arg(long = "start", help = "Personnel name the rotation starts from")]
        start: Option<String>,
    },

    /// Search a month's schedule by name, or list the whole month
    Search {
        #[arg(long = "name", help = "Name to search for (substring match)")]
        name: Option<String>,

        #[arg(long = "month", help = "Month key m-yyyy; defaults to the current month")]
        month: Option<String>,
    },

    /// Rebuild the cross-month summary table
    Report,

    /// Duty totals per person over a date range
    Stats {
        /// Range start (YYYY-MM-DD)
        from: String,
        /// Range end (YYYY-MM-DD)
        to: String,
    },

    /// Print the personnel roster (exempted entries excluded)
    Roster,

    /// Print the audit history
    Log {
        #[arg(long = "notifications", help = "Show notification log instead of changes")]
        notifications: bool,

        #[arg(long = "limit", default_value_t = 50)]
        limit: usize,
    },

    /// Manage officer contact details
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Export a month's schedule
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "month", help = "Month key m-yyyy; defaults to the current month")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the roster document and audit database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum ContactAction {
    /// Add or update an officer's contact details
    Set {
        name: String,

        #[arg(long)]
        telegram: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Show an officer's contact details
    Show { name: String },
}
