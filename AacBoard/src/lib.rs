//! # AacBoard
//!
//! A pure-Rust library for Augmentative and Alternative Communication (AAC)
//! board mappings: a home screen of topic images, each topic holding images
//! paired with the text they speak.
//!
//! ## Quick Start
//!
//! ```
//! use aacboard::prelude::*;
//!
//! let mut board = AacMappings::parse(
//!     "img/food/plate.png food\n>img/food/fries.png french fries\n",
//! )?;
//!
//! assert_eq!(board.image_locs(), vec!["img/food/plate.png"]);
//! assert_eq!(
//!     board.select("img/food/plate.png")?,
//!     Selection::Navigated("food".to_string())
//! );
//! assert_eq!(
//!     board.select("img/food/fries.png")?,
//!     Selection::Spoken("french fries".to_string())
//! );
//!
//! board.reset();
//! assert_eq!(board.current_category(), "");
//! # Ok::<(), aacboard::Error>(())
//! ```
//!
//! ### Loading and Saving
//!
//! ```no_run
//! use aacboard::AacMappings;
//!
//! let mut board = AacMappings::open("AACMappingsDefault.txt")?;
//! board.add_item("img/toys/box.png", "toys")?;
//! board.write_to_file("AACMappingsDefault.txt")?;
//! # Ok::<(), aacboard::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `aacboard` command-line binary

pub mod category;
pub mod config;
pub mod error;
pub mod formats;
pub mod mappings;
pub mod page;

// Re-exports for convenience
pub use category::Category;
pub use error::{Error, Result};
pub use mappings::{AacMappings, Screen};
pub use page::{BoardPage, Selection};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::category::Category;
    pub use crate::config::BoardConfig;
    pub use crate::error::{Error, Result};
    pub use crate::formats::board::{parse_board_str, read_board, serialize_board, write_board};
    pub use crate::mappings::{AacMappings, HOME_CATEGORY, Screen};
    pub use crate::page::{BoardPage, Selection};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
