use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for geoclock
/// CLI application to track geofenced staff attendance with SQLite
#[derive(Parser)]
#[command(
    name = "geoclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track staff attendance: geofenced clock-in/clock-out with SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override institution latitude
    #[arg(global = true, long = "inst-lat", allow_negative_numbers = true)]
    pub inst_lat: Option<f64>,

    /// Override institution longitude
    #[arg(global = true, long = "inst-lon", allow_negative_numbers = true)]
    pub inst_lon: Option<f64>,

    /// Override allowed radius in meters
    #[arg(global = true, long = "radius")]
    pub radius: Option<u32>,

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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing fields")]
        check: bool,
    },

    /// Manage the user registry
    User {
        #[arg(long = "add", help = "Register a new user")]
        add: bool,

        #[arg(long = "list", help = "List all users (admin only)")]
        list: bool,

        #[arg(long = "name", help = "Full name of the user to register")]
        name: Option<String>,

        #[arg(long = "username", help = "Unique username")]
        username: Option<String>,

        #[arg(long = "role", help = "Role: staff, admin or db_admin")]
        role: Option<String>,

        #[arg(long = "as", help = "Acting username (required for --list)")]
        actor: Option<String>,
    },

    /// Clock a user in at the given position
    In {
        /// Username of the staff member clocking in
        username: String,

        #[arg(long = "lat", help = "Reported latitude", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long = "lon", help = "Reported longitude", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Clock a user out at the given position
    Out {
        /// Username of the staff member clocking out
        username: String,

        #[arg(long = "lat", help = "Reported latitude", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long = "lon", help = "Reported longitude", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// List attendance sessions (all, or one user's)
    Logs {
        /// Username to filter on (staff may only list themselves)
        username: Option<String>,

        #[arg(long = "as", help = "Acting username")]
        actor: String,
    },

    /// Attendance reports (admin only)
    Report {
        #[arg(long = "date", help = "Daily summary for this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "user", help = "Username for a per-user range report")]
        user: Option<String>,

        #[arg(long = "from", help = "Range start date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "Range end date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "as", help = "Acting username")]
        actor: String,
    },

    /// Export one day of attendance to a file (admin only)
    Export {
        /// Day to export (YYYY-MM-DD)
        date: String,

        #[arg(long = "output", help = "Output file path")]
        output: String,

        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "as", help = "Acting username")]
        actor: String,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "as", help = "Acting username (admin or db_admin)")]
        actor: String,

        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
