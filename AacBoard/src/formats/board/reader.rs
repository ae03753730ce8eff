//! Board file reading and parsing

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{FIELD_SEPARATOR, ITEM_MARKER, is_valid_image_id};
use crate::error::{Error, Result};
use crate::mappings::AacMappings;

/// Read a board file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::Parse`] if a line is malformed.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::Parse`]: crate::Error::Parse
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<AacMappings> {
    let path = path.as_ref();
    let mut contents = String::new();
    {
        let mut file = File::open(path)?;
        file.read_to_string(&mut contents)?;
    }
    let board = parse_board_str(&contents)?;
    tracing::info!(
        "Loaded board {}: {} topics",
        path.display(),
        board.topics().count()
    );
    Ok(board)
}

/// Parse board mappings from text
///
/// Each topic entry line starts a fresh, empty category, even when the
/// topic name was seen before. The returned board sits on the home screen.
///
/// # Errors
///
/// Returns [`Error::Parse`] if a line has no separating space, its image
/// identifier is unusable, a topic entry has an empty topic name, or an
/// item line appears before any topic entry line.
///
/// [`Error::Parse`]: crate::Error::Parse
pub fn parse_board_str(text: &str) -> Result<AacMappings> {
    let mut board = AacMappings::new();
    let mut current_topic: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;

        if let Some(rest) = raw.strip_prefix(ITEM_MARKER) {
            let (image, spoken) = split_fields(rest, line_no, raw)?;
            let Some(topic) = current_topic.as_deref() else {
                return Err(parse_error(line_no, raw, "item line before any topic"));
            };
            let category = board
                .category_mut(topic)
                .ok_or_else(|| Error::CategoryNotFound {
                    name: topic.to_string(),
                })?;
            category.add_item(image, spoken);
            tracing::trace!(line = line_no, topic, image, "item");
        } else {
            let (image, topic) = split_fields(raw, line_no, raw)?;
            if image.starts_with(ITEM_MARKER) {
                return Err(parse_error(line_no, raw, "item marker after leading whitespace"));
            }
            if topic.is_empty() {
                return Err(parse_error(line_no, raw, "empty topic name"));
            }
            board.register_topic(image, topic);
            tracing::debug!(line = line_no, image, topic, "topic entry");
            current_topic = Some(topic.to_string());
        }
    }

    Ok(board)
}

/// Split `<image> <text>` on the first separator
///
/// Whitespace before the image is skipped; the text is returned as written.
fn split_fields<'a>(line: &'a str, line_no: usize, raw: &str) -> Result<(&'a str, &'a str)> {
    match line.trim_start().split_once(FIELD_SEPARATOR) {
        Some((image, text)) if is_valid_image_id(image) => Ok((image, text)),
        Some(_) => Err(parse_error(line_no, raw, "invalid image identifier")),
        None => Err(parse_error(line_no, raw, "missing space between image and text")),
    }
}

fn parse_error(line: usize, raw: &str, reason: &'static str) -> Error {
    Error::Parse {
        line,
        content: raw.to_string(),
        reason,
    }
}
