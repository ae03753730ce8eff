//! The page surface shared by a single category and the full board

use crate::error::Result;

/// Outcome of selecting an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A home screen image was chosen; the board now shows this topic.
    Navigated(String),
    /// A leaf image was chosen; this text should be spoken.
    Spoken(String),
}

impl Selection {
    /// The topic name or spoken text carried by the selection.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Selection::Navigated(text) | Selection::Spoken(text) => text,
        }
    }

    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Selection::Navigated(_))
    }
}

/// A selectable grid of images, as seen by a front-end.
pub trait BoardPage {
    /// Select an image on the page.
    fn select(&mut self, image: &str) -> Result<Selection>;

    /// Image identifiers currently displayed, in insertion order.
    fn image_locs(&self) -> Vec<String>;

    /// Add an image/text pairing to the page.
    fn add_item(&mut self, image: &str, text: &str) -> Result<()>;

    /// Name of the category being displayed (empty on the home screen).
    fn current_category(&self) -> &str;

    /// Whether the page knows about `image`.
    fn has_image(&self, image: &str) -> bool;
}
