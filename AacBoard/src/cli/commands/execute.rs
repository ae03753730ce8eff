//! Command execution implementations

use std::io;

use super::Commands;
use super::{board, session};
use crate::cli::CliContext;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, ctx: &mut CliContext) -> anyhow::Result<()> {
        match self {
            Commands::Show { board: board_file, topic } => {
                let (mappings, _) = ctx.open_board(board_file.as_deref())?;
                board::show(&mappings, topic.as_deref(), &mut io::stdout().lock())
            }
            Commands::Select { board: board_file, images } => {
                let (mut mappings, _) = ctx.open_board(board_file.as_deref())?;
                board::select(&mut mappings, images, &mut io::stdout().lock())
            }
            Commands::Add {
                board: board_file,
                topic,
                image,
                text,
                output,
            } => {
                let (mut mappings, path) = ctx.open_board(board_file.as_deref())?;
                board::add(&mut mappings, topic.as_deref(), image, text)?;
                let dest = output.as_deref().unwrap_or(path.as_path());
                mappings.write_to_file(dest)?;
                if !ctx.quiet {
                    println!("Saved {}", dest.display());
                }
                Ok(())
            }
            Commands::Check { board: board_file } => {
                let (mappings, path) = ctx.open_board(board_file.as_deref())?;
                board::check(&mappings)?;
                if !ctx.quiet {
                    println!("{} round-trips cleanly", path.display());
                }
                Ok(())
            }
            Commands::Normalize { board: board_file, output } => {
                let (mappings, _) = ctx.open_board(board_file.as_deref())?;
                mappings.write_to_file(output)?;
                if !ctx.quiet {
                    println!("Saved {}", output.display());
                }
                Ok(())
            }
            Commands::Session { board: board_file } => {
                let (mut mappings, path) = ctx.open_board(board_file.as_deref())?;
                let stdin = io::stdin();
                session::run(&mut mappings, &path, stdin.lock(), &mut io::stdout().lock())
            }
        }
    }
}
