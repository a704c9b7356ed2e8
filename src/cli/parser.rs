use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for tsvalidator
#[derive(Parser)]
#[command(
    name = "tsvalidator",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check timesheet CSV exports against payroll rules: required fields, dates, hour buckets and status consistency",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-client thresholds)
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a timesheet CSV file and print errors and warnings
    Check {
        /// CSV file to validate
        file: String,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Reference date for future/stale checks (YYYY-MM-DD, default: today)
        #[arg(long, value_name = "DATE")]
        today: Option<String>,

        #[arg(long = "no-warnings", help = "Hide warnings in the text report")]
        no_warnings: bool,
    },

    /// Re-export the normalized records
    Export {
        /// CSV file to read
        file: String,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Change the status of selected rows, write the new file and re-validate
    Status {
        /// CSV file to read
        file: String,

        #[arg(
            long,
            value_name = "ROWS",
            help = "Rows to update: all, N, N-M or a comma separated list (1-based)"
        )]
        rows: String,

        #[arg(long = "set", value_name = "STATUS", help = "New status label, e.g. \"Approved\"")]
        status: String,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,

        /// Reference date for future/stale checks (YYYY-MM-DD, default: today)
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },

    /// Print per-status counts, hour totals and rows with findings
    Summary {
        /// CSV file to read
        file: String,

        /// Reference date for future/stale checks (YYYY-MM-DD, default: today)
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default thresholds")]
        init: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },
}
