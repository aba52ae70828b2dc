use crate::export::ExportFormat;
use crate::models::language::Language;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftgap
#[derive(Parser)]
#[command(
    name = "rshiftgap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find guard shift coverage gaps in property service windows",
    long_about = None
)]
pub struct Cli {
    /// Override the snapshot path from the configuration
    #[arg(global = true, long = "snapshot", value_name = "FILE")]
    pub snapshot: Option<String>,

    /// Language of gap descriptions
    #[arg(global = true, long = "lang", value_enum)]
    pub lang: Option<Language>,

    /// Disable ANSI colors
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Compute the gaps of one service window against ad-hoc shifts
    Gaps {
        /// Service start time (HH:MM)
        #[arg(long = "start")]
        start: String,

        /// Service end time (HH:MM); earlier than start means overnight
        #[arg(long = "end")]
        end: String,

        /// Service name used in descriptions
        #[arg(long = "name", default_value = "")]
        name: String,

        /// Assigned shift as HH:MM-HH:MM (repeatable)
        #[arg(long = "shift", value_name = "HH:MM-HH:MM")]
        shifts: Vec<String>,
    },

    /// List the services of the snapshot
    Services,

    /// Show the coverage of one day
    Day {
        /// Day to inspect (YYYY-MM-DD)
        date: String,

        #[arg(long = "service", help = "Only check this service id")]
        service: Option<i64>,
    },

    /// Show the footer summary of one day
    Footer {
        /// Day to summarize (YYYY-MM-DD)
        date: String,

        #[arg(long = "service", help = "Only check this service id")]
        service: Option<i64>,
    },

    /// Show a month calendar with the days that have coverage gaps
    Calendar {
        #[arg(
            long,
            short,
            help = "Period to show: YYYY, YYYY-MM, YYYY-MM-DD or start:end (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "service", help = "Only check this service id")]
        service: Option<i64>,

        #[arg(long = "details", help = "List the gaps of each highlighted day")]
        details: bool,
    },

    /// Export the coverage gaps of a period
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            short,
            value_name = "PERIOD",
            help = "YYYY, YYYY-MM, YYYY-MM-DD or start:end (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "service", help = "Only check this service id")]
        service: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
