use crate::export::ExportFormat;
use crate::models::metric::LeaderboardMetric;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// Daily check-in engine: streaks, reward points and leaderboards over SQLite
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily check-in tracker: streaks, reward points and leaderboards backed by SQLite",
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
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
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
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Check a user in for today (or an explicit date)
    Checkin {
        /// Stable user identifier
        user: String,

        /// Display name shown on leaderboards
        #[arg(long = "name", help = "Display name (latest observed name wins)")]
        name: String,

        /// Check-in day (YYYY-MM-DD); defaults to today in the reference timezone
        #[arg(long = "date", help = "Override the check-in date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Show a user's check-in status and aggregates
    Status {
        user: String,

        #[arg(long = "date", help = "Evaluate \"today\" as this date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// List a user's recent check-ins, most recent first
    History {
        user: String,

        #[arg(long = "limit", help = "Maximum number of records to show")]
        limit: Option<usize>,
    },

    /// Show the ranking for a metric
    Leaderboard {
        #[arg(
            long = "metric",
            value_enum,
            default_value = "total",
            help = "Ranking metric"
        )]
        metric: LeaderboardMetric,

        #[arg(long = "limit", help = "Maximum number of rows to show")]
        limit: Option<usize>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the destination if it exists")]
        force: bool,
    },

    /// Export check-in records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Restrict the export to one user id")]
        user: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
