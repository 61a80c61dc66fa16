use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tsverify
#[derive(Parser)]
#[command(
    name = "tsverify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build or import a timesheet, submit it for verification and read the report",
    long_about = None
)]
pub struct Cli {
    /// Override the local store path (useful for tests)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the verification endpoint URL
    #[arg(global = true, long = "endpoint")]
    pub endpoint: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Field values shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Date of the entry (YYYY-MM-DD, MM/DD/YYYY, ...). Unreadable dates become today
    #[arg(long)]
    pub date: Option<String>,

    /// Hours worked (empty = 0)
    #[arg(long)]
    pub hours: Option<String>,

    /// Position label, see `tsverify positions`
    #[arg(long = "pos")]
    pub position: Option<String>,

    /// Location of the work
    #[arg(long)]
    pub location: Option<String>,
}

impl FieldArgs {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.hours.is_none()
            && self.position.is_none()
            && self.location.is_none()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the local store and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Show or set the email used for verification
    Email {
        /// New email address; omit to show the current one
        address: Option<String>,
    },

    /// Add a new row (dated today unless --date is given)
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit row N; without field flags, toggles its editing state
    Edit {
        /// Row number as shown by `list`
        row: usize,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete row N
    Del {
        /// Row number as shown by `list`
        row: usize,
    },

    /// List the current rows
    List,

    /// Replace all rows with the content of an .xls/.xlsx workbook
    Import {
        /// Workbook path
        file: String,
    },

    /// Submit the rows for verification and show the report
    Submit,

    /// Write an empty workbook in the expected import layout
    Template {
        #[arg(value_name = "FILE")]
        file: String,

        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List the recognized position labels
    Positions,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
