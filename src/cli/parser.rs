use clap::{Parser, Subcommand};

/// Command-line interface definition for trep
/// CLI application to track daily came/went times with calendar views
#[derive(Parser)]
#[command(
    name = "trep",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time report CLI: daily came/went times, totals and notes in calendar views",
    long_about = None
)]
pub struct Cli {
    /// Override the record store path (useful for tests or custom files)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the session file path
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, record store and session files
    Init,

    /// Show the table for the current view (or a one-shot override)
    Show {
        /// View mode: day, week, month or around
        #[arg(long, help = "View mode: day, week, month, around")]
        view: Option<String>,

        /// Anchor date (YYYY-MM-DD); defaults to the session's anchor
        #[arg(long, help = "Anchor date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Switch the view mode and show the resulting table
    View {
        /// One of: day, week, month, around
        mode: String,
    },

    /// Page forward by one period (or one day in day/around views)
    Next,

    /// Page backward by one period (or one day in day/around views)
    Prev,

    /// Jump the view back to today
    Today,

    /// Record presence now: widen today's came/went window to this moment
    Punch,

    /// Edit one day's record field by field
    Edit {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        /// Came time (HH:MM:SS, HH:MM or HH)
        #[arg(long = "in", help = "Came time (HH:MM[:SS])")]
        came: Option<String>,

        /// Went time (HH:MM:SS, HH:MM or HH)
        #[arg(long = "out", help = "Went time (HH:MM[:SS])")]
        went: Option<String>,

        /// Free-text note for the day
        #[arg(long, help = "Note text for the day")]
        note: Option<String>,
    },

    /// Delete one day's record
    Del {
        /// Date to delete (YYYY-MM-DD)
        date: String,
    },

    /// Switch to another record store file
    Open {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Save the record store (optionally to a new file)
    Save {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Show or adjust configuration and session settings
    Config {
        #[arg(long = "print", help = "Print the configuration and session settings")]
        print_config: bool,

        #[arg(long = "lunch-from", help = "Set the lunch interval start (HH:MM[:SS])")]
        lunch_from: Option<String>,

        #[arg(long = "lunch-to", help = "Set the lunch interval end (HH:MM[:SS])")]
        lunch_to: Option<String>,
    },

    /// Manage project records
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Register a new project
    Add {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Project start date (YYYY-MM-DD); defaults to today
        #[arg(long = "start-date")]
        start_date: Option<String>,
    },

    /// List registered projects
    List,
}
