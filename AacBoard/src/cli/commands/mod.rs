use clap::Subcommand;
use std::path::PathBuf;

pub mod board;
pub mod execute;
pub mod session;

#[derive(Subcommand)]
pub enum Commands {
    /// List the images on the home screen or inside a topic
    Show {
        /// Board mapping file (defaults to the configured board)
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Show this topic instead of the home screen
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Select images in order, starting from the home screen
    Select {
        /// Board mapping file (defaults to the configured board)
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Image identifiers to select
        #[arg(required = true)]
        images: Vec<String>,
    },

    /// Add an item and write the board back
    Add {
        /// Board mapping file (defaults to the configured board)
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Add a spoken item inside this topic (omit to add a new topic)
        #[arg(short, long)]
        topic: Option<String>,

        /// Image identifier
        image: String,

        /// Topic name (home screen) or text to speak (inside a topic)
        text: String,

        /// Write to this file instead of overwriting the board
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify that a board survives a write and re-read unchanged
    Check {
        /// Board mapping file (defaults to the configured board)
        #[arg(short, long)]
        board: Option<PathBuf>,
    },

    /// Rewrite a board in canonical form
    Normalize {
        /// Board mapping file (defaults to the configured board)
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Output file
        output: PathBuf,
    },

    /// Drive a board interactively from standard input
    Session {
        /// Board mapping file (defaults to the configured board)
        #[arg(short, long)]
        board: Option<PathBuf>,
    },
}
