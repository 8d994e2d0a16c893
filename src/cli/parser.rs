use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for inspectlog
/// CLI application to record facility inspections with SQLite
#[derive(Parser)]
#[command(
    name = "inspectlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record facility inspection measurements, list and chart them, export them to spreadsheets",
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

    /// Record one inspection (six fields, in form order)
    Add {
        /// Temperature in °C (decimal)
        #[arg(allow_hyphen_values = true)]
        temperature: String,

        /// Relative humidity in % (decimal)
        #[arg(allow_hyphen_values = true)]
        humidity: String,

        /// Water level reading (free text, e.g. "1.2m")
        water_level: String,

        /// Number of working lamps (integer)
        #[arg(allow_hyphen_values = true)]
        lamp_count: String,

        /// Number of fire extinguishers (integer)
        #[arg(allow_hyphen_values = true)]
        extinguisher_count: String,

        /// Name of the inspector on duty
        inspector: String,
    },

    /// List all recorded inspections
    List {
        /// Compact one-row-per-record table instead of labeled blocks
        #[arg(long = "table", help = "Render the listing as a compact table")]
        table: bool,
    },

    /// Print the (timestamp, temperature, humidity) series for charting
    Chart,

    /// Export all inspections to a spreadsheet file
    Export {
        /// Export format: csv, json or xlsx (default from config)
        #[arg(long, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Output file path (default from config, overwritten on each export)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Wipe all inspections (admin credentials required)
    Reset {
        /// Admin username
        #[arg(long = "user", value_name = "USER")]
        user: String,

        /// Admin password
        #[arg(long = "password", value_name = "PASSWORD")]
        password: String,
    },

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Inspect the database (size, record count, integrity)
    Db {
        /// Show database information
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        /// Check database integrity
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// Manage the configuration file
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },
}
