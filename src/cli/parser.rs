use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeGaps
/// CLI application to find and fill the uncovered slots of a work week
#[derive(Parser)]
#[command(
    name = "rtimegaps",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find the gaps between tracked time entries in a work week and fill them with filler entries",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple accounts)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration and list every problem")]
        check: bool,

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

    /// Show the account and workspace the API key resolves to
    Whoami,

    /// Show the gaps of a week without writing anything
    Preview {
        /// Any date of the target week (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "format", value_enum, default_value = "text", help = "Output format")]
        format: ExportFormat,

        #[arg(long = "file", help = "Write the report to a file instead of stdout")]
        file: Option<String>,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Create filler entries for the gaps of a week
    Fill {
        /// Any date of the target week (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,

        #[arg(
            long = "dry-run",
            conflicts_with = "yes",
            help = "Show the planned fillers without creating them"
        )]
        dry_run: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal operation log")]
        print: bool,
    },
}
