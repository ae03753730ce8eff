//! `AacBoard` CLI - command-line front-end for AAC board mapping files

pub mod commands;

use std::path::{Path, PathBuf};

use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

use crate::config::BoardConfig;
use crate::mappings::AacMappings;

#[derive(Parser)]
#[command(name = "aacboard")]
#[command(about = "aacboard: browse and edit AAC board mapping files", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress extra output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by every command
pub struct CliContext {
    pub config: BoardConfig,
    config_path: Option<PathBuf>,
    pub quiet: bool,
}

impl CliContext {
    #[must_use]
    pub fn new(config: BoardConfig, config_path: Option<PathBuf>, quiet: bool) -> Self {
        Self {
            config,
            config_path,
            quiet,
        }
    }

    /// The board to use: the one given, or the configured default
    #[must_use]
    pub fn board_path(&self, board: Option<&Path>) -> PathBuf {
        board.map_or_else(|| self.config.board_path.clone(), Path::to_path_buf)
    }

    /// Open a board and remember it in the recent list
    ///
    /// # Errors
    /// Returns an error if the board file cannot be read or parsed.
    pub fn open_board(&mut self, board: Option<&Path>) -> anyhow::Result<(AacMappings, PathBuf)> {
        let path = self.board_path(board);
        let mappings = AacMappings::open(&path)
            .map_err(|e| anyhow::anyhow!("failed to load board {}: {e}", path.display()))?;

        self.config.add_recent_board(&path);
        let saved = match &self.config_path {
            Some(config_path) => self.config.save_to(config_path),
            None => self.config.save(),
        };
        if let Err(e) = saved {
            tracing::warn!("Could not save config: {e}");
        }

        Ok((mappings, path))
    }
}

/// Run the `AacBoard` CLI
///
/// # Errors
/// Returns an error if the selected command fails.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BoardConfig::load_from(path)?,
        None => BoardConfig::load(),
    };

    // Setup logging
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = CliContext::new(config, cli.config.clone(), cli.quiet);
    cli.command.execute(&mut ctx)
}
