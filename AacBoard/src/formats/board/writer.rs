//! Board file writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{FIELD_SEPARATOR, ITEM_MARKER};
use crate::error::Result;
use crate::mappings::AacMappings;

/// Serialize board mappings into file contents
///
/// Topic entries are written in the order they were added, each followed
/// by its category's items. A topic without a registered category still
/// gets its entry line; the missing items are logged and skipped.
#[must_use]
pub fn serialize_board(board: &AacMappings) -> String {
    let mut out = String::new();

    for (image, topic) in board.topics() {
        push_entry(&mut out, image, topic);

        let Some(category) = board.category(topic) else {
            tracing::warn!(image, topic, "no category registered for topic, skipping its items");
            continue;
        };
        for (item, spoken) in category.items() {
            out.push(ITEM_MARKER);
            push_entry(&mut out, item, spoken);
        }
    }

    out
}

/// Write a board file to disk
///
/// # Errors
/// Returns an error if file writing fails.
pub fn write_board<P: AsRef<Path>>(path: P, board: &AacMappings) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(serialize_board(board).as_bytes())?;
    writer.flush()?;

    tracing::info!("Wrote board {}", path.display());
    Ok(())
}

fn push_entry(out: &mut String, image: &str, text: &str) {
    out.push_str(image);
    out.push(FIELD_SEPARATOR);
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_orders_entries_and_items() {
        let mut board = AacMappings::new();
        board.add_item("img/food/plate.png", "food").unwrap();
        board.add_item("img/clothing/hanger.png", "clothing").unwrap();
        board.select("img/food/plate.png").unwrap();
        board.add_item("img/food/fries.png", "french fries").unwrap();

        assert_eq!(
            serialize_board(&board),
            "img/food/plate.png food\n>img/food/fries.png french fries\nimg/clothing/hanger.png clothing\n"
        );
    }

    #[test]
    fn test_serialize_skips_missing_category() {
        let mut board = AacMappings::parse(
            "img/a.png food\n>img/b.png fries\nimg/c.png clothing\n>img/d.png shirt\n",
        )
        .unwrap();
        board.drop_category("food");

        assert_eq!(
            serialize_board(&board),
            "img/a.png food\nimg/c.png clothing\n>img/d.png shirt\n"
        );
    }

    #[test]
    fn test_serialize_empty_board() {
        assert_eq!(serialize_board(&AacMappings::new()), "");
    }
}
