use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "daymark")]
#[command(about = "Assign a flavor of the day and a note to calendar days", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the month grid (current month if omitted)
    #[command(alias = "s")]
    Show {
        /// Month as a number or name (e.g. 3, march, Mar)
        month: Option<String>,

        /// Year (defaults to the current year)
        year: Option<i32>,
    },

    /// Assign a choice to a day
    #[command(alias = "a")]
    Set {
        /// Date as Y-M-D (e.g. 2024-3-7)
        date: String,

        /// Choice label (see `daymark choices`; any text is accepted)
        choice: String,

        /// Additional note for the day
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Print a single day's entry
    #[command(alias = "g")]
    Get {
        /// Date as Y-M-D (e.g. 2024-3-7)
        date: String,
    },

    /// Remove a day's entry
    #[command(alias = "rm")]
    Unset {
        /// Date as Y-M-D (e.g. 2024-3-7)
        date: String,
    },

    /// Erase every entry in a month
    Clear {
        /// Month as a number or name
        month: String,

        /// Year
        year: i32,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List the selectable choice labels
    Choices,
}
