use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rMaintlog
/// CLI application to record workshop maintenance tasks in a CSV file
#[derive(Parser)]
#[command(
    name = "rmaintlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple maintenance log CLI: record workshop tasks and chart their status",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a second workshop)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Narrowing options shared by `list` and `export`.
/// Each flag may be repeated; an omitted flag keeps every value present.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "category", short = 'c', value_name = "CATEGORY")]
    pub categories: Vec<String>,

    #[arg(long = "status", short = 's', value_name = "STATUS")]
    pub statuses: Vec<String>,

    #[arg(long = "technician", short = 't', value_name = "NAME")]
    pub technicians: Vec<String>,

    #[arg(long = "priority", short = 'p', value_name = "PRIORITY")]
    pub priorities: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Print the internal journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal journal")]
        print: bool,
    },

    /// Record a maintenance task
    Add {
        /// Date of the task (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(
            long = "category",
            help = "Mechanical, Electrical, Hydraulics, Logistics or Other"
        )]
        category: String,

        #[arg(long = "equipment", default_value = "")]
        equipment: String,

        /// Task description
        #[arg(long = "task", default_value = "")]
        task: String,

        #[arg(long = "technician", default_value = "")]
        technician: String,

        #[arg(long = "status", help = "Pending, \"In Progress\" or Completed")]
        status: String,

        #[arg(long = "priority", help = "High, Medium or Low")]
        priority: String,

        #[arg(long = "notes", default_value = "")]
        notes: String,
    },

    /// Show the maintenance log, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Overview: task totals and charts by status, category and technician
    Dashboard,

    /// Status chart, tasks over time and the pending tasks table
    Analytics,

    /// Create a backup copy of the data file
    Backup {
        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the (filtered) maintenance log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },
}
