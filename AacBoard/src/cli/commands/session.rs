//! Line-driven interactive board session

use std::io::{BufRead, Write};
use std::path::Path;

use console::style;

use crate::mappings::AacMappings;
use crate::page::Selection;

const HELP: &str = "\
commands:
  ls                 list images on the current screen
  select IMAGE       select an image
  add IMAGE TEXT     add a topic (home screen) or an item (inside a topic)
  back | reset       return to the home screen
  where              show the current topic
  save [FILE]        write the board (defaults to the file it was loaded from)
  help               show this message
  quit | exit        leave the session";

/// Run a session over `input`, writing responses to `out`
///
/// Command failures are reported and the session continues; only I/O
/// errors on `input` or `out` end it early.
pub fn run<R: BufRead, W: Write>(
    board: &mut AacMappings,
    board_path: &Path,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "ls" => list(board, out)?,
            "where" => {
                let topic = board.current_category();
                if topic.is_empty() {
                    writeln!(out, "home screen")?;
                } else {
                    writeln!(out, "{topic}")?;
                }
            }
            "back" | "reset" | "home" => board.reset(),
            "select" => match board.select(rest) {
                Ok(Selection::Navigated(topic)) => writeln!(out, "navigated to {topic}")?,
                Ok(Selection::Spoken(text)) => writeln!(out, "speak: {text}")?,
                Err(e) => writeln!(out, "{} {e}", style("error:").red())?,
            },
            "add" => {
                let (image, text) = rest.split_once(' ').unwrap_or((rest, ""));
                match board.add_item(image, text.trim()) {
                    Ok(()) => writeln!(out, "added {image}")?,
                    Err(e) => writeln!(out, "{} {e}", style("error:").red())?,
                }
            }
            "save" => {
                let dest = if rest.is_empty() { board_path } else { Path::new(rest) };
                match board.write_to_file(dest) {
                    Ok(()) => writeln!(out, "saved {}", dest.display())?,
                    Err(e) => writeln!(out, "{} {e}", style("error:").red())?,
                }
            }
            other => writeln!(out, "unknown command '{other}' (try 'help')")?,
        }
    }
    Ok(())
}

fn list<W: Write>(board: &AacMappings, out: &mut W) -> anyhow::Result<()> {
    for image in board.image_locs() {
        writeln!(out, "{image}")?;
    }
    Ok(())
}
