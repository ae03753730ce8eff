//! CLI commands operating on a loaded board

use std::io::Write;

use console::style;

use crate::category::Category;
use crate::mappings::AacMappings;
use crate::page::Selection;

/// List a screen's images alongside their topic names or spoken text
pub fn show<W: Write>(board: &AacMappings, topic: Option<&str>, out: &mut W) -> anyhow::Result<()> {
    let (heading, page) = match topic {
        Some(name) => {
            let category = board
                .category(name)
                .ok_or_else(|| anyhow::anyhow!("no topic named '{name}'"))?;
            (format!("Topic: {name}"), category)
        }
        None => ("Home screen".to_string(), board.home()),
    };

    writeln!(out, "{} ({} images)", style(heading).bold(), page.len())?;
    write_items(page, out)?;
    Ok(())
}

fn write_items<W: Write>(page: &Category, out: &mut W) -> anyhow::Result<()> {
    for (image, text) in page.items() {
        writeln!(out, "  {image}  {}", style(text).cyan())?;
    }
    Ok(())
}

/// Select each image in turn, reporting navigation and speech
pub fn select<W: Write>(board: &mut AacMappings, images: &[String], out: &mut W) -> anyhow::Result<()> {
    for image in images {
        match board.select(image)? {
            Selection::Navigated(topic) => writeln!(out, "navigated to {topic}")?,
            Selection::Spoken(text) => writeln!(out, "speak: {text}")?,
        }
    }
    Ok(())
}

/// Add an item on the home screen, or inside `topic` when given
pub fn add(board: &mut AacMappings, topic: Option<&str>, image: &str, text: &str) -> anyhow::Result<()> {
    board.reset();
    if let Some(name) = topic {
        let entry = board
            .topics()
            .find(|(_, t)| *t == name)
            .map(|(entry_image, _)| entry_image.to_string())
            .ok_or_else(|| anyhow::anyhow!("no topic named '{name}'"))?;
        board.select(&entry)?;
    }
    board.add_item(image, text)?;
    board.reset();
    Ok(())
}

/// Write the board out, read it back, and compare every screen
pub fn check(board: &AacMappings) -> anyhow::Result<()> {
    let reparsed = AacMappings::parse(&board.to_board_string())?;
    let mismatches = compare_screens(board, &reparsed);
    if mismatches.is_empty() {
        return Ok(());
    }
    for mismatch in &mismatches {
        tracing::error!("{mismatch}");
    }
    anyhow::bail!("board does not round-trip: {} mismatches", mismatches.len())
}

/// Differences between two boards as seen by a user navigating them
pub fn compare_screens(expected: &AacMappings, actual: &AacMappings) -> Vec<String> {
    let mut mismatches = Vec::new();

    if expected.home().image_locs() != actual.home().image_locs() {
        mismatches.push("home screen images differ".to_string());
    }

    for (image, topic) in expected.topics() {
        if !actual.has_image(image) {
            mismatches.push(format!("entry image '{image}' missing"));
        }
        let want: Option<Vec<(&str, &str)>> = expected.category(topic).map(|c| c.items().collect());
        let got: Option<Vec<(&str, &str)>> = actual.category(topic).map(|c| c.items().collect());
        if want != got {
            mismatches.push(format!("topic '{topic}' items differ"));
        }
    }

    mismatches
}
