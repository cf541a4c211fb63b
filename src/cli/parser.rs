use clap::{Parser, Subcommand};

/// Command-line interface definition for rHourLog
/// Stopwatch CLI that keeps one record of worked hours per day in SQLite
#[derive(Parser)]
#[command(
    name = "rhourlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A stopwatch that records one day of worked hours per date and keeps a running hour bank in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a command the interactive stopwatch session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive stopwatch session (default)
    Run,

    /// Initialize the database and configuration
    Init,

    /// Record today's hours manually
    Manual {
        /// Worked hours (HH:MM)
        hours: String,
    },

    /// Record negative hours for today
    Negative {
        /// Hours to deduct (HH:MM)
        hours: String,
    },

    /// Edit an existing record
    Edit {
        /// Record id (as shown by `list`)
        id: i64,

        /// New date (DD/MM/YYYY)
        date: String,

        /// New hours (HH:MM)
        hours: String,
    },

    /// Show every record and the total of hours
    List,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the configuration in effect (file, database, baseline, separator)")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity check, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check integrity, DD/MM/YYYY dates and one record per day")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
