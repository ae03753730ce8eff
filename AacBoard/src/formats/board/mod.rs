//! Plain-text board mapping format
//!
//! One entry per line. A topic entry line is `<image> <topic name>`; the
//! lines after it that start with `>` are that topic's items, written as
//! `><image> <spoken text>`. Only the first space separates the fields, so
//! topic names and spoken text may contain spaces. Everything after that
//! space is kept as written, trailing spaces included, and may be empty for
//! an item. Whitespace before the image identifier is ignored, but an item
//! line must start with `>` in its first column.
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/watermelon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/shirt.png collared shirt
//! ```

mod reader;
mod writer;

pub use reader::{parse_board_str, read_board};
pub use writer::{serialize_board, write_board};

/// Prefix marking a leaf item line
pub const ITEM_MARKER: char = '>';

/// Separator between an image identifier and its text
pub const FIELD_SEPARATOR: char = ' ';

/// Whether `image` can be written as an image identifier and read back unchanged
///
/// Identifiers are non-empty and contain no whitespace, since the first
/// space on a line ends the identifier.
pub fn is_valid_image_id(image: &str) -> bool {
    !image.is_empty() && !image.chars().any(char::is_whitespace)
}

/// Whether `text` fits on a single line of a board file
pub fn is_valid_text(text: &str) -> bool {
    !text.contains(['\n', '\r'])
}
