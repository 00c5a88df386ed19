use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rdaylog
/// CLI application to record planned and actual tasks into per-day CSV files
#[derive(Parser)]
#[command(
    name = "rdaylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple daily task log: record planned and actual tasks into one CSV file per day",
    long_about = None
)]
pub struct Cli {
    /// Year of the selected date (default: today)
    #[arg(global = true, long = "year")]
    pub year: Option<String>,

    /// Month of the selected date (default: today)
    #[arg(global = true, long = "month")]
    pub month: Option<String>,

    /// Day of the selected date (default: today)
    #[arg(global = true, long = "day")]
    pub day: Option<String>,

    /// Override the data directory holding the per-day files
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Print diagnostic logs to stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Task fields accepted on the command line.
/// Start/end are `HH:MM`; anything missing is asked interactively.
#[derive(Args, Clone, Default)]
pub struct TaskFields {
    /// Project identifier
    #[arg(long = "project")]
    pub project: Option<String>,

    /// Task type: planned or actual
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Task title
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Start time (HH:MM)
    #[arg(long = "start")]
    pub start: Option<String>,

    /// End time (HH:MM)
    #[arg(long = "end")]
    pub end: Option<String>,

    /// Status: done, active, crit or milestone
    #[arg(long = "status")]
    pub status: Option<String>,
}

impl TaskFields {
    pub fn is_empty(&self) -> bool {
        self.project.is_none()
            && self.kind.is_none()
            && self.title.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.status.is_none()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the data directory
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Load and show the tasks of the selected date
    Load {
        /// Print the tasks as JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },

    /// Add a task to the selected date (default type: planned)
    Add {
        #[command(flatten)]
        fields: TaskFields,
    },

    /// Edit a task of the selected date
    Edit {
        /// Task number as shown by `load` (1-based)
        index: usize,

        #[command(flatten)]
        fields: TaskFields,
    },

    /// Delete a task of the selected date
    Del {
        /// Task number as shown by `load` (1-based)
        index: usize,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Run a stopwatch; on stop, record an actual task with the measured start/end
    Timer {
        /// Project identifier for the recorded task
        #[arg(long = "project")]
        project: Option<String>,

        /// Title for the recorded task
        #[arg(long = "title")]
        title: Option<String>,
    },
}
