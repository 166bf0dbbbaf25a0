use clap::{Parser, Subcommand};

/// Command-line interface definition for rClock
/// CLI application to clock in and out of categorized sessions with SQLite
#[derive(Parser)]
#[command(
    name = "rclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny time clock: clock in and out of categorized sessions stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clock in, optionally naming a category
    In {
        /// Category label (more than one word falls back to "default")
        args: Vec<String>,
    },

    /// Clock out of the open session
    Out {
        /// Category label (omit to close whatever category is open)
        args: Vec<String>,
    },

    /// Show the log of recent clock actions
    Log {
        #[arg(short = 'n', long = "number", help = "Number of records to show")]
        number: Option<usize>,
    },

    /// Show whether you are clocked in and for how long
    Status,

    /// Show the time elapsed between the last two clock actions
    Last,

    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "audit", help = "Print rows from the internal log table")]
        audit: bool,
    },
}

/// Resolve the category from the positional arguments of `in` / `out`.
///
/// Exactly one argument names the category; none, or more than one, yields
/// the empty category so the defaults apply.
pub fn parse_category(args: &[String]) -> String {
    match args {
        [category] => category.clone(),
        _ => String::new(),
    }
}
